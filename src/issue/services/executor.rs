//! Builds the creation mutation and hands it to the transport.

use crate::issue::{
    domain::{ISSUE_CREATE_MUTATION, IssueCreateInput, ResolvedFields, ValidatedIssueRequest},
    ports::{MutationTransport, RawMutationResult},
    services::{IssueCreationError, IssueCreationResult},
};
use std::sync::Arc;
use tracing::debug;

/// Sends exactly one issue creation mutation per call.
#[derive(Clone)]
pub struct MutationExecutor<T>
where
    T: MutationTransport,
{
    transport: Arc<T>,
}

impl<T> MutationExecutor<T>
where
    T: MutationTransport,
{
    /// Creates an executor over the given transport.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Builds the mutation input from supplied and resolved fields and
    /// executes it.
    ///
    /// # Errors
    ///
    /// Returns [`IssueCreationError::Transport`] with the transport's error
    /// unchanged, or [`IssueCreationError::Encoding`] if the input cannot be
    /// encoded.
    pub async fn execute(
        &self,
        request: &ValidatedIssueRequest,
        resolved: &ResolvedFields,
    ) -> IssueCreationResult<RawMutationResult> {
        let input = IssueCreateInput::new(request, resolved);
        let variables = input.to_variables().map_err(IssueCreationError::Encoding)?;
        debug!(team_id = %resolved.team_id, "sending issueCreate mutation");
        Ok(self
            .transport
            .execute_mutation(ISSUE_CREATE_MUTATION, &variables)
            .await?)
    }
}
