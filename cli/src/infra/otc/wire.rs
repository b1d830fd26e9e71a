//! ECS v1 request and response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::ShutdownMode;

#[derive(Debug, Serialize)]
pub struct ServerRef<'a> {
    pub id: &'a str,
}

fn server_refs(ids: &[String]) -> Vec<ServerRef<'_>> {
    ids.iter().map(|id| ServerRef { id }).collect()
}

/// `POST /v1/{project_id}/cloudservers/action` with `os-start`.
#[derive(Debug, Serialize)]
pub struct BatchStartRequest<'a> {
    #[serde(rename = "os-start")]
    pub os_start: BatchStartOption<'a>,
}

#[derive(Debug, Serialize)]
pub struct BatchStartOption<'a> {
    pub servers: Vec<ServerRef<'a>>,
}

impl<'a> BatchStartRequest<'a> {
    #[must_use]
    pub fn new(ids: &'a [String]) -> Self {
        Self {
            os_start: BatchStartOption {
                servers: server_refs(ids),
            },
        }
    }
}

/// `POST /v1/{project_id}/cloudservers/action` with `os-stop`.
#[derive(Debug, Serialize)]
pub struct BatchStopRequest<'a> {
    #[serde(rename = "os-stop")]
    pub os_stop: BatchStopOption<'a>,
}

#[derive(Debug, Serialize)]
pub struct BatchStopOption<'a> {
    #[serde(rename = "type")]
    pub mode: ShutdownMode,
    pub servers: Vec<ServerRef<'a>>,
}

impl<'a> BatchStopRequest<'a> {
    #[must_use]
    pub fn new(ids: &'a [String], mode: ShutdownMode) -> Self {
        Self {
            os_stop: BatchStopOption {
                mode,
                servers: server_refs(ids),
            },
        }
    }
}

/// Response of batch actions: the asynchronous job tracking the request.
#[derive(Debug, Deserialize, Default)]
pub struct JobResponse {
    #[serde(default)]
    pub job_id: Option<String>,
}

/// `GET /v1/{project_id}/cloudservers/{server_id}`.
#[derive(Debug, Deserialize)]
pub struct ShowServerResponse {
    pub server: ServerDetail,
}

#[derive(Debug, Deserialize)]
pub struct ServerDetail {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
}
