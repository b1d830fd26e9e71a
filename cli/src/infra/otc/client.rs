//! `ComputeControl` over the Open Telekom Cloud ECS v1 REST API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Method, Url};
use tracing::debug;

use crate::application::ports::{BatchReceipt, ComputeControl};
use crate::domain::error::ProviderError;
use crate::domain::{FleetConfig, InstanceStatus, ShutdownMode};
use crate::infra::credentials::Credentials;
use crate::infra::otc::signer::{DATE_FORMAT, Signer, SigningRequest};
use crate::infra::otc::wire::{BatchStartRequest, BatchStopRequest, JobResponse, ShowServerResponse};

/// Per-request HTTP timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// ECS client for a single region and project.
///
/// Built once per run and shared read-only by every call.
pub struct OtcEcsClient {
    http: reqwest::Client,
    endpoint: Url,
    host: String,
    credentials: Credentials,
}

impl OtcEcsClient {
    /// Client for the endpoint configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(config: &FleetConfig, credentials: Credentials) -> Result<Self> {
        Self::with_endpoint(config.endpoint_base(), credentials)
    }

    /// Client for an explicit endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL with a host or the
    /// HTTP client cannot be built.
    pub fn with_endpoint(endpoint: &str, credentials: Credentials) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("invalid endpoint URL '{endpoint}'"))?;
        let host = match (endpoint.host_str(), endpoint.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => anyhow::bail!("endpoint URL '{endpoint}' has no host"),
        };
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("ecs-tier/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            endpoint,
            host,
            credentials,
        })
    }

    fn servers_path(&self, suffix: &str) -> String {
        format!("/v1/{}/cloudservers{suffix}", self.credentials.project_id)
    }

    /// Send a signed request and return the body of a 2xx response.
    async fn send(&self, method: Method, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let sdk_date = chrono::Utc::now().format(DATE_FORMAT).to_string();
        let headers = [
            ("Content-Type", "application/json"),
            ("Host", self.host.as_str()),
            ("X-Project-Id", self.credentials.project_id.as_str()),
            ("X-Sdk-Date", sdk_date.as_str()),
        ];
        let authorization = Signer::new(
            &self.credentials.access_key_id,
            &self.credentials.secret_access_key,
        )
        .authorization(&SigningRequest {
            method: method.as_str(),
            path,
            query: &[],
            headers: &headers,
            body: &body,
        });

        let url = self
            .endpoint
            .join(path)
            .with_context(|| format!("building URL for {path}"))?;
        debug!(%method, %url, "sending ECS request");

        // reqwest derives `Host` from the URL; it matches the signed value.
        let mut request = self.http.request(method.clone(), url);
        for (name, value) in headers.iter().filter(|(name, _)| *name != "Host") {
            request = request.header(*name, *value);
        }
        let response = request
            .header("Authorization", authorization)
            .body(body)
            .send()
            .await
            .with_context(|| format!("{method} {path}"))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("reading response of {method} {path}"))?;
        debug!(%method, path, status = status.as_u16(), "ECS response");

        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }
            .into());
        }
        Ok(bytes.to_vec())
    }

    async fn batch_action(&self, body: Vec<u8>) -> Result<BatchReceipt> {
        let bytes = self
            .send(Method::POST, &self.servers_path("/action"), body)
            .await?;
        let job: JobResponse = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            debug!(error = %e, "batch response carried no job");
            JobResponse::default()
        });
        Ok(BatchReceipt { job_id: job.job_id })
    }
}

impl ComputeControl for OtcEcsClient {
    async fn batch_start(&self, ids: &[String]) -> Result<BatchReceipt> {
        let body = serde_json::to_vec(&BatchStartRequest::new(ids))
            .context("encoding batch start request")?;
        self.batch_action(body).await.context("batch start")
    }

    async fn batch_stop(&self, ids: &[String], mode: ShutdownMode) -> Result<BatchReceipt> {
        let body = serde_json::to_vec(&BatchStopRequest::new(ids, mode))
            .context("encoding batch stop request")?;
        self.batch_action(body).await.context("batch stop")
    }

    async fn describe_status(&self, id: &str) -> Result<InstanceStatus> {
        let bytes = self
            .send(Method::GET, &self.servers_path(&format!("/{id}")), Vec::new())
            .await
            .with_context(|| format!("querying server {id}"))?;
        let parsed: ShowServerResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ProviderError::Decode(e.to_string()))
            .with_context(|| format!("querying server {id}"))?;
        debug!(
            instance = %parsed.server.id,
            name = parsed.server.name.as_deref().unwrap_or(""),
            status = %parsed.server.status,
            "server described"
        );
        Ok(InstanceStatus::from_wire(&parsed.server.status))
    }
}
