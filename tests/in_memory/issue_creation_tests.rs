//! End-to-end issue creation through the in-memory directory and transport.

use crate::in_memory::helpers::{Harness, directory, harness};
use issuesmith::issue::{
    adapters::memory::{InMemoryDirectory, InMemoryIssueTransport},
    config::PipelineConfig,
    domain::IssueRequest,
    ports::{ResolutionError, TransportError},
    services::{IssueCreationError, IssueCreationService},
};
use rstest::rstest;
use serde_json::{Value, json};
use std::num::NonZeroUsize;
use std::sync::Arc;

fn sent_input(harness: &Harness) -> Value {
    harness
        .transport
        .submissions()
        .expect("submissions should be readable")
        .last()
        .and_then(|sent| sent.input().cloned())
        .expect("a mutation should have been sent")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creates_issue_from_human_readable_references(harness: Harness) {
    let request = IssueRequest::new("  Checkout button unresponsive ", "Engineering")
        .with_description("Clicking **Pay** does nothing.\n\nSeen on Safari.")
        .with_state("in progress")
        .with_assignee("Grace")
        .with_project("website")
        .with_priority(1)
        .with_labels(vec!["bug".to_owned(), "checkout".to_owned()])
        .with_due_date("2025-06-30");

    let result = harness
        .service
        .create_issue(&request)
        .await
        .expect("issue should be created");

    assert_eq!(result.identifier, "ENG-1");
    assert_eq!(result.title, "Checkout button unresponsive");
    assert_eq!(result.url, "https://tracker.example/issue/ENG-1");
    assert_eq!(
        sent_input(&harness),
        json!({
            "title": "Checkout button unresponsive",
            "description": "Clicking **Pay** does nothing.\n\nSeen on Safari.",
            "teamId": "team-eng",
            "assigneeId": "user-grace",
            "stateId": "state-progress",
            "priority": 1,
            "projectId": "project-web",
            "labels": ["bug", "checkout"],
            "dueDate": "2025-06-30"
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn native_identifiers_skip_directory_lookups(harness: Harness) {
    let team_id = "0f8e7d6c-5b4a-4392-8170-6f5e4d3c2b1a";
    let project_id = "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d";
    let request = IssueRequest::new("Flaky test", team_id).with_project(project_id);

    harness
        .service
        .create_issue(&request)
        .await
        .expect("issue should be created");

    assert_eq!(harness.directory.lookup_count(), 0);
    let input = sent_input(&harness);
    assert_eq!(input.get("teamId"), Some(&json!(team_id)));
    assert_eq!(input.get("projectId"), Some(&json!(project_id)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn self_assignment_resolves_to_viewer(harness: Harness) {
    let request = IssueRequest::new("Write release notes", "ENG").with_assignee("me");

    harness
        .service
        .create_issue(&request)
        .await
        .expect("issue should be created");

    assert_eq!(sent_input(&harness).get("assigneeId"), Some(&json!("user-ada")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_template_is_applied_on_request(harness: Harness) {
    let request = IssueRequest::new("Broken link", "ENG")
        .with_project("Website")
        .with_auto_apply_project_template(true);

    harness
        .service
        .create_issue(&request)
        .await
        .expect("issue should be created");

    assert_eq!(harness.directory.template_lookup_count(), 1);
    assert_eq!(
        sent_input(&harness).get("templateId"),
        Some(&json!("template-bug"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn template_outage_does_not_block_creation(directory: InMemoryDirectory) {
    let harness = Harness::with_directory(directory.with_failing_templates("maintenance"));
    let request = IssueRequest::new("Broken link", "ENG")
        .with_project("Website")
        .with_auto_apply_project_template(true);

    let result = harness
        .service
        .create_issue(&request)
        .await
        .expect("issue should be created without a template");

    assert_eq!(result.identifier, "ENG-1");
    assert!(sent_input(&harness).get("templateId").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unsafe_request_sends_nothing(harness: Harness) {
    let request = IssueRequest::new("Broken link", "ENG").with_project("../../etc");

    let err = harness
        .service
        .create_issue(&request)
        .await
        .expect_err("traversal should be rejected");

    assert!(matches!(err, IssueCreationError::Sanitize(_)));
    assert_eq!(harness.directory.lookup_count(), 0);
    assert!(
        harness
            .transport
            .submissions()
            .expect("submissions should be readable")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_reference_sends_nothing(harness: Harness) {
    let request = IssueRequest::new("Broken link", "ENG").with_state("Archived");

    let err = harness
        .service
        .create_issue(&request)
        .await
        .expect_err("unknown state should fail");

    assert!(matches!(
        err,
        IssueCreationError::Resolution(ResolutionError::NotFound { .. })
    ));
    assert!(
        harness
            .transport
            .submissions()
            .expect("submissions should be readable")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authentication_failure_is_surfaced(harness: Harness) {
    harness
        .transport
        .push_error(TransportError::Authentication("token revoked".to_owned()))
        .expect("script error");

    let err = harness
        .service
        .create_issue(&IssueRequest::new("Broken link", "ENG"))
        .await
        .expect_err("authentication should fail");

    assert_eq!(err.to_string(), "authentication error: token revoked");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_requests_create_distinct_issues(harness: Harness) {
    let request = IssueRequest::new("Broken link", "ENG");

    let first = harness
        .service
        .create_issue(&request)
        .await
        .expect("first issue");
    let second = harness
        .service
        .create_issue(&request)
        .await
        .expect("second issue");

    assert_eq!(first.identifier, "ENG-1");
    assert_eq!(second.identifier, "ENG-2");
    assert_ne!(first.id, second.id);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn token_estimate_follows_configured_ratio(directory: InMemoryDirectory) {
    let shared = Arc::new(directory);
    let service = IssueCreationService::with_config(
        Arc::clone(&shared),
        Arc::clone(&shared),
        Arc::new(InMemoryIssueTransport::new()),
        PipelineConfig::default().with_chars_per_token(NonZeroUsize::MIN),
    );
    let request = IssueRequest::new("Broken link", "ENG");

    let result = service.create_issue(&request).await.expect("issue");
    let encoded = serde_json::to_string(&json!({
        "id": &result.id,
        "identifier": &result.identifier,
        "title": &result.title,
        "url": &result.url,
    }))
    .expect("summary should encode");

    assert_eq!(result.estimated_tokens.get(), encoded.chars().count());
}
