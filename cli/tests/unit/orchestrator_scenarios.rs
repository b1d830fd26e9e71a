//! Tiered start/stop runs end to end: orchestrator → `OtcEcsClient` → stub
//! ECS endpoint. Poll budgets are a few milliseconds so timeouts stay fast.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use ecs_tier::application::services::fleet_status::describe_fleet;
use ecs_tier::application::services::orchestrator::{RunOutcome, run_action};
use ecs_tier::application::services::poller::PollPolicy;
use ecs_tier::domain::{Action, Fleet, InstanceStatus, Tier};

use crate::support::{RecordingReporter, StubEcs};

const POLICY: PollPolicy = PollPolicy {
    timeout: Duration::from_millis(30),
    interval: Duration::from_millis(10),
};

fn fleet(backend: &[&str], frontend: &[&str]) -> Fleet {
    Fleet {
        backend: backend.iter().map(|s| (*s).to_string()).collect(),
        frontend: frontend.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[tokio::test]
async fn start_brings_backend_up_before_frontend() {
    let stub = StubEcs::scripted(
        &[
            ("b1", &["SHUTOFF", "STARTING", "ACTIVE"]),
            ("f1", &["ACTIVE"]),
        ],
        202,
    )
    .await;
    let reporter = RecordingReporter::default();

    let report = run_action(
        &stub.client(),
        &reporter,
        &fleet(&["b1"], &["f1"]),
        Action::Start,
        POLICY,
    )
    .await;

    assert_eq!(report.outcome(), RunOutcome::Completed);
    assert_eq!(
        stub.request_lines(),
        vec![
            "POST /v1/proj123/cloudservers/action",
            "GET /v1/proj123/cloudservers/b1",
            "GET /v1/proj123/cloudservers/b1",
            "GET /v1/proj123/cloudservers/b1",
            "POST /v1/proj123/cloudservers/action",
            "GET /v1/proj123/cloudservers/f1",
        ]
    );
    let bodies: Vec<String> = stub
        .requests()
        .into_iter()
        .filter(|r| r.method == "POST")
        .map(|r| r.body)
        .collect();
    assert!(bodies[0].contains(r#""id":"b1""#), "{}", bodies[0]);
    assert!(bodies[1].contains(r#""id":"f1""#), "{}", bodies[1]);
    assert!(reporter.contains("ok: All Backend servers started successfully."));
    assert!(reporter.contains("ok: All Frontend servers started successfully."));
}

#[tokio::test]
async fn stop_with_stuck_frontend_never_touches_backend() {
    let stub = StubEcs::scripted(&[("f1", &["ACTIVE"]), ("b1", &["ACTIVE"])], 202).await;
    let reporter = RecordingReporter::default();

    let report = run_action(
        &stub.client(),
        &reporter,
        &fleet(&["b1"], &["f1"]),
        Action::Stop,
        POLICY,
    )
    .await;

    assert_eq!(report.outcome(), RunOutcome::TierFailed(Tier::Frontend));
    assert_eq!(report.not_attempted(), vec![Tier::Backend]);
    let requests = stub.requests();
    // One batch stop, then ceil(30ms / 10ms) polls.
    assert_eq!(requests.len(), 4);
    assert!(requests[0].body.contains(r#""type":"SOFT""#));
    assert!(
        requests
            .iter()
            .all(|r| !r.path.ends_with("/b1") && !r.body.contains("b1")),
        "backend was contacted: {:?}",
        stub.request_lines()
    );
    assert!(reporter.contains("warn: Timeout waiting for instance f1 to reach status: SHUTOFF"));
    assert!(reporter.contains("warn: Some Frontend servers failed to stop."));
}

#[tokio::test]
async fn every_instance_in_a_failing_tier_is_polled() {
    let stub = StubEcs::scripted(
        &[("b1", &["ERROR"]), ("b2", &["ACTIVE"]), ("f1", &["ACTIVE"])],
        202,
    )
    .await;
    let reporter = RecordingReporter::default();

    let report = run_action(
        &stub.client(),
        &reporter,
        &fleet(&["b1", "b2"], &["f1"]),
        Action::Start,
        POLICY,
    )
    .await;

    assert_eq!(report.outcome(), RunOutcome::TierFailed(Tier::Backend));
    assert_eq!(report.tiers[0].failed, vec!["b1".to_string()]);
    assert!(
        stub.request_lines()
            .contains(&"GET /v1/proj123/cloudservers/b2".to_string())
    );
    assert!(!stub.request_lines().iter().any(|l| l.ends_with("/f1")));
}

#[tokio::test]
async fn rejected_batch_still_polls_and_can_succeed() {
    let stub = StubEcs::scripted(&[("b1", &["ACTIVE"]), ("f1", &["ACTIVE"])], 500).await;
    let reporter = RecordingReporter::default();

    let report = run_action(
        &stub.client(),
        &reporter,
        &fleet(&["b1"], &["f1"]),
        Action::Start,
        POLICY,
    )
    .await;

    assert_eq!(report.outcome(), RunOutcome::Completed);
    assert!(reporter.contains("warn: Error starting instances:"));
    assert!(reporter.contains("HTTP 500"));
}

#[tokio::test]
async fn unreachable_instance_times_out_with_errors_reported() {
    let stub = StubEcs::scripted(&[], 202).await;
    let reporter = RecordingReporter::default();

    let report = run_action(
        &stub.client(),
        &reporter,
        &fleet(&["ghost"], &[]),
        Action::Start,
        POLICY,
    )
    .await;

    assert_eq!(report.outcome(), RunOutcome::TierFailed(Tier::Backend));
    assert!(reporter.contains("warn: Error retrieving status of instance ghost:"));
    assert!(reporter.contains("(current: unknown)"));
}

#[tokio::test]
async fn fleet_status_lists_every_instance() {
    let stub = StubEcs::scripted(&[("b1", &["SHUTOFF"]), ("f1", &["BUILD"])], 202).await;
    let reporter = RecordingReporter::default();

    let rows = describe_fleet(
        &stub.client(),
        &reporter,
        &fleet(&["b1", "ghost"], &["f1"]),
    )
    .await;

    let summary: Vec<(Tier, &str, Option<InstanceStatus>)> = rows
        .iter()
        .map(|r| (r.tier, r.id.as_str(), r.status.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Tier::Backend, "b1", Some(InstanceStatus::Shutoff)),
            (Tier::Backend, "ghost", None),
            (Tier::Frontend, "f1", Some(InstanceStatus::Build)),
        ]
    );
    // Status is read-only: no batch actions.
    assert!(stub.requests().iter().all(|r| r.method == "GET"));
}
