//! GraphQL mutation transport port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Raw `data` object returned by a mutation call, `None` when the response
/// carried no data at all.
pub type RawMutationResult = Option<Value>;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Sends a single GraphQL mutation to the remote tracker.
///
/// The client handle, authentication and timeouts belong to the
/// implementation.
#[async_trait]
pub trait MutationTransport: Send + Sync {
    /// Executes `document` with `variables` and returns the response data.
    async fn execute_mutation(
        &self,
        document: &str,
        variables: &Value,
    ) -> TransportResult<RawMutationResult>;
}

/// Transport-level failures, surfaced to callers unchanged.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The API rejected the call because the rate limit is exhausted.
    #[error("rate limited by issue tracker API{}", format_reset(*.reset_at))]
    RateLimited {
        /// When the limit window resets, if known.
        reset_at: Option<DateTime<Utc>>,
        /// Requests remaining in the window, if known.
        remaining: Option<u32>,
    },

    /// The API rejected the credentials.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// The API answered with a non-success HTTP status.
    #[error("http {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// The API returned GraphQL errors instead of data.
    #[error("graphql error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The call did not complete in time.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// Any other client failure.
    #[error("transport error: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps an arbitrary client failure.
    #[must_use]
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }

    /// Returns `true` for rate-limit rejections.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

fn format_reset(reset_at: Option<DateTime<Utc>>) -> String {
    reset_at.map_or_else(String::new, |instant| {
        format!(", resets at {}", instant.to_rfc3339())
    })
}
