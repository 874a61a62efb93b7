//! Untrusted issue creation request as received from a tool or CLI caller.

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Loosely-typed request to create an issue.
///
/// Every field is optional on the wire so that missing required fields are
/// reported by the sanitizer as validation errors rather than decode
/// failures. Nothing here has been checked yet.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::domain::IssueRequest;
///
/// let request = IssueRequest::new("Fix login redirect", "ENG")
///     .with_priority(2)
///     .with_labels(vec!["bug".to_owned()]);
/// assert_eq!(request.team.as_deref(), Some("ENG"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRequest {
    /// Issue title.
    pub title: Option<String>,
    /// Team name or identifier.
    pub team: Option<String>,
    /// Markdown description.
    pub description: Option<String>,
    /// `me`, a user name, or a user identifier.
    pub assignee: Option<String>,
    /// Workflow state name.
    pub state: Option<String>,
    /// Priority, expected within `0..=4`.
    pub priority: Option<i64>,
    /// Project name or identifier.
    pub project: Option<String>,
    /// Ordered label names.
    pub labels: Option<Vec<String>>,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: Option<String>,
    /// Parent issue identifier.
    pub parent_id: Option<String>,
    /// Explicit template identifier.
    pub template_id: Option<String>,
    /// Apply the project's default template when no template is given.
    pub auto_apply_project_template: Option<bool>,
}

impl IssueRequest {
    /// Creates a request with the required title and team.
    #[must_use]
    pub fn new(title: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            team: Some(team.into()),
            ..Self::default()
        }
    }

    /// Decodes a request from a JSON tool payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedRequest`] when the payload does not
    /// match the request shape, for example a fractional priority.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value)
            .map_err(|err| ValidationError::MalformedRequest(err.to_string()))
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee reference.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the workflow state name.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the project reference.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Sets the labels.
    ///
    /// Labels keep their order. Each entry is trimmed during sanitization
    /// and entries left blank are dropped, so the forwarded list can be
    /// shorter than the one given here. An empty list is forwarded as is.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = Some(labels.into_iter().collect());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the parent issue identifier.
    #[must_use]
    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets an explicit template identifier.
    #[must_use]
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Enables or disables automatic project template application.
    #[must_use]
    pub const fn with_auto_apply_project_template(mut self, enabled: bool) -> Self {
        self.auto_apply_project_template = Some(enabled);
        self
    }
}
