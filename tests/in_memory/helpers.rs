//! Shared fixtures for in-memory issue creation integration tests.

use issuesmith::issue::{
    adapters::memory::{InMemoryDirectory, InMemoryIssueTransport},
    services::IssueCreationService,
};
use rstest::fixture;
use std::sync::Arc;

/// Service wired to in-memory adapters.
pub type TestService =
    IssueCreationService<InMemoryDirectory, InMemoryDirectory, InMemoryIssueTransport>;

/// Pipeline plus handles on its collaborators for inspection.
pub struct Harness {
    pub directory: Arc<InMemoryDirectory>,
    pub transport: InMemoryIssueTransport,
    pub service: TestService,
}

impl Harness {
    /// Wires a service around the given directory.
    pub fn with_directory(directory: InMemoryDirectory) -> Self {
        let shared = Arc::new(directory);
        let transport = InMemoryIssueTransport::with_identifier_prefix("ENG");
        let service = IssueCreationService::new(
            Arc::clone(&shared),
            Arc::clone(&shared),
            Arc::new(transport.clone()),
        );
        Self {
            directory: shared,
            transport,
            service,
        }
    }
}

/// Directory with one team, workflow state, project and teammate.
#[fixture]
pub fn directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with_viewer("user-ada", "Ada")
        .with_user("user-grace", "Grace")
        .with_team("team-eng", "Engineering", "ENG")
        .with_state("state-todo", "Todo")
        .with_state("state-progress", "In Progress")
        .with_project("project-web", "Website")
        .with_project_template("project-web", "template-bug")
}

/// Harness around the default [`directory`].
#[fixture]
pub fn harness(directory: InMemoryDirectory) -> Harness {
    Harness::with_directory(directory)
}
