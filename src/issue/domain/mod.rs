//! Domain model for issue creation.
//!
//! Request, validated request, resolved identifiers, mutation input and
//! result projection. Nothing in here performs I/O.

mod error;
mod field;
mod ids;
mod mutation;
mod request;
mod resolved;
mod result;
mod stage;
mod validated;
mod values;

pub use error::{SanitizeError, SanitizeResult, SecurityError, SecurityViolation, ValidationError};
pub use field::{FieldRole, IssueField};
pub use ids::{
    IssueId, ParentIssueId, ProjectId, TeamId, TemplateId, UserId, WorkflowStateId,
    looks_like_native_id,
};
pub use mutation::{ISSUE_CREATE_MUTATION, IssueCreateInput};
pub use request::IssueRequest;
pub use resolved::ResolvedFields;
pub use result::{IssueResult, IssueSummary};
pub use stage::PipelineStage;
pub use validated::ValidatedIssueRequest;
pub use values::{AssigneeRef, DueDate, IssueTitle, Priority, Reference};
