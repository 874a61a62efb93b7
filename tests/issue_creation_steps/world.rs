//! Shared world state for issue creation BDD scenarios.

use issuesmith::issue::{
    adapters::memory::{InMemoryDirectory, InMemoryIssueTransport},
    domain::{IssueRequest, IssueResult},
    services::IssueCreationResult,
};
use rstest::fixture;

/// Scenario world for issue creation behaviour tests.
pub struct IssueWorld {
    pub directory: InMemoryDirectory,
    pub transport: InMemoryIssueTransport,
    pub pending_request: Option<IssueRequest>,
    pub last_result: Option<IssueCreationResult<IssueResult>>,
}

impl IssueWorld {
    /// Creates a world whose viewer is a single known user.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: InMemoryDirectory::new().with_viewer("user-ada", "Ada"),
            transport: InMemoryIssueTransport::with_identifier_prefix("ENG"),
            pending_request: None,
            last_result: None,
        }
    }

    /// Replaces the directory with the result of a builder step.
    pub fn configure_directory(
        &mut self,
        configure: impl FnOnce(InMemoryDirectory) -> InMemoryDirectory,
    ) {
        let current = std::mem::take(&mut self.directory);
        self.directory = configure(current);
    }

    /// Applies a change to the pending request.
    pub fn update_request(
        &mut self,
        update: impl FnOnce(IssueRequest) -> IssueRequest,
    ) -> Result<(), eyre::Report> {
        let request = self
            .pending_request
            .take()
            .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
        self.pending_request = Some(update(request));
        Ok(())
    }
}

impl Default for IssueWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IssueWorld {
    IssueWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
