//! Minimal issue projection returned to callers.

use super::IssueId;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// The four issue fields exposed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    /// Backend identifier.
    pub id: IssueId,
    /// Human identifier such as `ENG-42`.
    pub identifier: String,
    /// Issue title as stored by the backend.
    pub title: String,
    /// Web URL of the issue.
    pub url: String,
}

impl IssueSummary {
    /// Estimates the token cost of this projection.
    ///
    /// The estimate is the serialized character count divided by
    /// `chars_per_token`, rounded up, and never less than one.
    #[must_use]
    pub fn estimate_tokens(&self, chars_per_token: NonZeroUsize) -> NonZeroUsize {
        let characters = serde_json::to_string(self).map_or_else(
            |_| self.identifier.chars().count() + self.title.chars().count(),
            |encoded| encoded.chars().count(),
        );
        NonZeroUsize::new(characters.div_ceil(chars_per_token.get())).unwrap_or(NonZeroUsize::MIN)
    }
}

/// Result of a successful issue creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueResult {
    /// Backend identifier.
    pub id: IssueId,
    /// Human identifier such as `ENG-42`.
    pub identifier: String,
    /// Issue title as stored by the backend.
    pub title: String,
    /// Web URL of the issue.
    pub url: String,
    /// Approximate token cost of the projected content.
    pub estimated_tokens: NonZeroUsize,
}

impl IssueResult {
    /// Builds the result from a projected summary.
    #[must_use]
    pub fn from_summary(summary: IssueSummary, chars_per_token: NonZeroUsize) -> Self {
        let estimated_tokens = summary.estimate_tokens(chars_per_token);
        Self {
            id: summary.id,
            identifier: summary.identifier,
            title: summary.title,
            url: summary.url,
            estimated_tokens,
        }
    }
}
