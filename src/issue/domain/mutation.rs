//! Mutation document and input payload for issue creation.

use super::{
    DueDate, ParentIssueId, Priority, ProjectId, ResolvedFields, TeamId, TemplateId, UserId,
    ValidatedIssueRequest, WorkflowStateId,
};
use serde::Serialize;
use serde_json::Value;

/// GraphQL document sent for every issue creation.
pub const ISSUE_CREATE_MUTATION: &str = "\
mutation IssueCreate($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue {
      id
      identifier
      title
      url
    }
  }
}";

/// Input object of the issue creation mutation.
///
/// Absent optional fields are skipped during serialization, so their keys
/// never appear in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateInput<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    team_id: &'a TeamId,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee_id: Option<&'a UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_id: Option<&'a WorkflowStateId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a ProjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<DueDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a ParentIssueId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_id: Option<&'a TemplateId>,
}

impl<'a> IssueCreateInput<'a> {
    /// Combines validated request values with resolved identifiers.
    #[must_use]
    pub fn new(request: &'a ValidatedIssueRequest, resolved: &'a ResolvedFields) -> Self {
        Self {
            title: request.title().as_str(),
            description: request.description(),
            team_id: &resolved.team_id,
            assignee_id: resolved.assignee_id.as_ref(),
            state_id: resolved.state_id.as_ref(),
            priority: request.priority(),
            project_id: resolved.project_id.as_ref(),
            labels: request.labels(),
            due_date: request.due_date(),
            parent_id: request.parent_id(),
            template_id: resolved.template_id.as_ref(),
        }
    }

    /// Encodes the GraphQL variables object, `{"input": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the input cannot be encoded.
    pub fn to_variables(&self) -> serde_json::Result<Value> {
        serde_json::to_value(IssueCreateVariables { input: self })
    }
}

#[derive(Serialize)]
struct IssueCreateVariables<'a, 'b> {
    input: &'b IssueCreateInput<'a>,
}
