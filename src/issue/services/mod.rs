//! Application services for issue creation.

mod error;
mod executor;
mod pipeline;
mod projector;

pub use error::{IssueCreationError, IssueCreationResult};
pub use executor::MutationExecutor;
pub use pipeline::IssueCreationService;
pub use projector::{ProjectionError, project_issue_create};
