//! Sanitized issue request.

use super::{AssigneeRef, DueDate, IssueTitle, ParentIssueId, Priority, Reference, TemplateId};

/// Issue request that has passed every sanitizer check.
///
/// Optional fields are `None` exactly when the caller did not supply them,
/// so resolvers are never invoked for them and their keys never reach the
/// mutation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIssueRequest {
    pub(crate) title: IssueTitle,
    pub(crate) team: Reference,
    pub(crate) description: Option<String>,
    pub(crate) assignee: Option<AssigneeRef>,
    pub(crate) state: Option<Reference>,
    pub(crate) priority: Option<Priority>,
    pub(crate) project: Option<Reference>,
    pub(crate) labels: Option<Vec<String>>,
    pub(crate) due_date: Option<DueDate>,
    pub(crate) parent_id: Option<ParentIssueId>,
    pub(crate) template_id: Option<TemplateId>,
    pub(crate) auto_apply_project_template: bool,
}

impl ValidatedIssueRequest {
    /// Returns the issue title.
    #[must_use]
    pub const fn title(&self) -> &IssueTitle {
        &self.title
    }

    /// Returns the team reference.
    #[must_use]
    pub const fn team(&self) -> &Reference {
        &self.team
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee reference.
    #[must_use]
    pub const fn assignee(&self) -> Option<&AssigneeRef> {
        self.assignee.as_ref()
    }

    /// Returns the workflow state reference.
    #[must_use]
    pub const fn state(&self) -> Option<&Reference> {
        self.state.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the project reference.
    #[must_use]
    pub const fn project(&self) -> Option<&Reference> {
        self.project.as_ref()
    }

    /// Returns the labels, if the caller supplied a label list.
    #[must_use]
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Returns the parent issue identifier.
    #[must_use]
    pub const fn parent_id(&self) -> Option<&ParentIssueId> {
        self.parent_id.as_ref()
    }

    /// Returns the explicit template identifier.
    #[must_use]
    pub const fn template_id(&self) -> Option<&TemplateId> {
        self.template_id.as_ref()
    }

    /// Returns whether the project's default template should be applied.
    #[must_use]
    pub const fn auto_apply_project_template(&self) -> bool {
        self.auto_apply_project_template
    }
}
