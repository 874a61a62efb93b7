//! In-memory mutation transport.

use crate::issue::ports::{MutationTransport, RawMutationResult, TransportError, TransportResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// A mutation received by [`InMemoryIssueTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedMutation {
    /// GraphQL document.
    pub document: String,
    /// GraphQL variables.
    pub variables: Value,
}

impl SubmittedMutation {
    /// Returns the `input` object of the variables, if present.
    #[must_use]
    pub fn input(&self) -> Option<&Value> {
        self.variables.get("input")
    }
}

/// Transport that records every mutation and answers from a script or with
/// a synthesised `issueCreate` response.
///
/// Without scripted replies each mutation creates an issue numbered from
/// one under the configured identifier prefix.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTransport {
    state: Arc<Mutex<TransportState>>,
}

#[derive(Debug, Default)]
struct TransportState {
    prefix: Option<String>,
    submissions: Vec<SubmittedMutation>,
    scripted: VecDeque<TransportResult<RawMutationResult>>,
    issued: u64,
}

impl InMemoryIssueTransport {
    const DEFAULT_PREFIX: &'static str = "ISS";
    const BASE_URL: &'static str = "https://tracker.example/issue";

    /// Creates a transport with no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that numbers issues under `prefix`.
    #[must_use]
    pub fn with_identifier_prefix(prefix: impl Into<String>) -> Self {
        let transport = Self::default();
        if let Ok(mut state) = transport.state.lock() {
            state.prefix = Some(prefix.into());
        }
        transport
    }

    /// Queues a raw response for the next unanswered mutation.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn push_response(&self, response: RawMutationResult) -> TransportResult<()> {
        self.lock()?.scripted.push_back(Ok(response));
        Ok(())
    }

    /// Queues a transport failure for the next unanswered mutation.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn push_error(&self, error: TransportError) -> TransportResult<()> {
        self.lock()?.scripted.push_back(Err(error));
        Ok(())
    }

    /// Returns every mutation received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn submissions(&self) -> TransportResult<Vec<SubmittedMutation>> {
        Ok(self.lock()?.submissions.clone())
    }

    fn lock(&self) -> TransportResult<MutexGuard<'_, TransportState>> {
        self.state
            .lock()
            .map_err(|err| TransportError::other(std::io::Error::other(err.to_string())))
    }
}

impl TransportState {
    fn synthesise(&mut self, variables: &Value) -> Value {
        self.issued += 1;
        let prefix = self
            .prefix
            .as_deref()
            .unwrap_or(InMemoryIssueTransport::DEFAULT_PREFIX);
        let identifier = format!("{prefix}-{}", self.issued);
        let title = variables
            .pointer("/input/title")
            .and_then(Value::as_str)
            .unwrap_or_default();
        json!({
            "issueCreate": {
                "success": true,
                "lastSyncId": self.issued,
                "issue": {
                    "id": Uuid::new_v4().to_string(),
                    "identifier": identifier,
                    "title": title,
                    "url": format!("{}/{identifier}", InMemoryIssueTransport::BASE_URL),
                    "priority": variables.pointer("/input/priority").cloned().unwrap_or(Value::Null),
                    "description": variables.pointer("/input/description").cloned().unwrap_or(Value::Null),
                    "createdAt": "2024-01-01T00:00:00.000Z",
                }
            }
        })
    }
}

#[async_trait]
impl MutationTransport for InMemoryIssueTransport {
    async fn execute_mutation(
        &self,
        document: &str,
        variables: &Value,
    ) -> TransportResult<RawMutationResult> {
        let mut state = self.lock()?;
        state.submissions.push(SubmittedMutation {
            document: document.to_owned(),
            variables: variables.clone(),
        });
        match state.scripted.pop_front() {
            Some(reply) => reply,
            None => Ok(Some(state.synthesise(variables))),
        }
    }
}
