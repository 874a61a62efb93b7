//! Projects the raw `issueCreate` response onto [`IssueResult`].

use crate::issue::{
    domain::{IssueResult, IssueSummary},
    ports::RawMutationResult,
};
use serde::Deserialize;
use serde_json::Value;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Failures detected while interpreting a mutation response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// The response is empty or does not have the expected shape.
    #[error("malformed issue creation response: {0}")]
    Malformed(String),

    /// The API reported that the issue was not created.
    #[error("Failed to create issue: {0}")]
    CreationFailed(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueCreateData {
    issue_create: Option<IssueCreatePayload>,
}

#[derive(Deserialize)]
struct IssueCreatePayload {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    issue: Option<Value>,
}

/// Interprets the raw mutation result.
///
/// An empty result or one missing `issueCreate` is malformed. A payload
/// whose `success` flag is not `true`, or whose `issue` is null, is a
/// creation failure. Otherwise only `id`, `identifier`, `title` and `url`
/// are kept.
///
/// # Errors
///
/// Returns [`ProjectionError::Malformed`] or
/// [`ProjectionError::CreationFailed`] as described above.
pub fn project_issue_create(
    raw: RawMutationResult,
    chars_per_token: NonZeroUsize,
) -> Result<IssueResult, ProjectionError> {
    let data = match raw {
        None | Some(Value::Null) => {
            return Err(ProjectionError::Malformed("empty response".to_owned()));
        }
        Some(value) => value,
    };
    let decoded: IssueCreateData = serde_json::from_value(data)
        .map_err(|err| ProjectionError::Malformed(err.to_string()))?;
    let payload = decoded
        .issue_create
        .ok_or_else(|| ProjectionError::Malformed("response is missing issueCreate".to_owned()))?;

    if payload.success != Some(true) {
        return Err(ProjectionError::CreationFailed(
            "the API did not report success".to_owned(),
        ));
    }
    let issue = payload.issue.ok_or_else(|| {
        ProjectionError::CreationFailed("the API returned no issue".to_owned())
    })?;

    let summary: IssueSummary = serde_json::from_value(issue)
        .map_err(|err| ProjectionError::Malformed(format!("invalid issue payload: {err}")))?;
    Ok(IssueResult::from_summary(summary, chars_per_token))
}
