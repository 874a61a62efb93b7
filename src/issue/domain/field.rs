//! Request field names and the roles that decide which checks apply to them.

use std::fmt;

/// How a field value is used downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Free-form user content sent verbatim to the backend.
    FreeText,
    /// A value that keys a lookup or is sent as an opaque identifier.
    Identifier,
}

/// A field of an issue creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueField {
    /// Issue title.
    Title,
    /// Issue description.
    Description,
    /// Team name or identifier.
    Team,
    /// Assignee alias, name, or identifier.
    Assignee,
    /// Workflow state name.
    State,
    /// Project name or identifier.
    Project,
    /// A label entry at the given position.
    Label(usize),
    /// Due date.
    DueDate,
    /// Parent issue identifier.
    ParentId,
    /// Explicit template identifier.
    TemplateId,
}

impl IssueField {
    /// Returns the role that governs which security checks apply.
    #[must_use]
    pub const fn role(self) -> FieldRole {
        match self {
            Self::Title | Self::Description | Self::Label(_) | Self::DueDate => {
                FieldRole::FreeText
            }
            Self::Team
            | Self::Assignee
            | Self::State
            | Self::Project
            | Self::ParentId
            | Self::TemplateId => FieldRole::Identifier,
        }
    }

    /// Returns the request key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Team => "team",
            Self::Assignee => "assignee",
            Self::State => "state",
            Self::Project => "project",
            Self::Label(_) => "labels",
            Self::DueDate => "dueDate",
            Self::ParentId => "parentId",
            Self::TemplateId => "templateId",
        }
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(index) => write!(f, "labels[{index}]"),
            other => f.write_str(other.key()),
        }
    }
}
