//! Backend identifiers resolved for a single request.

use super::{ProjectId, TeamId, TemplateId, UserId, WorkflowStateId};

/// Identifiers resolved from the references in a validated request.
///
/// A field is `Some` only when the corresponding reference was supplied and
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    /// Resolved team.
    pub team_id: TeamId,
    /// Resolved workflow state.
    pub state_id: Option<WorkflowStateId>,
    /// Resolved assignee.
    pub assignee_id: Option<UserId>,
    /// Resolved project.
    pub project_id: Option<ProjectId>,
    /// Explicit or auto-resolved template.
    pub template_id: Option<TemplateId>,
}

impl ResolvedFields {
    /// Creates resolved fields with only the team set.
    #[must_use]
    pub const fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            state_id: None,
            assignee_id: None,
            project_id: None,
            template_id: None,
        }
    }
}
