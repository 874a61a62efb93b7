//! Opaque backend identifiers.
//!
//! The remote tracker hands out string identifiers for teams, workflow
//! states, users, projects, templates and issues. Each gets its own newtype
//! so a resolved team ID can never be passed where a project ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! opaque_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a backend identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Backend identifier of a team.
    TeamId
);
opaque_id!(
    /// Backend identifier of a workflow state.
    WorkflowStateId
);
opaque_id!(
    /// Backend identifier of a user.
    UserId
);
opaque_id!(
    /// Backend identifier of a project.
    ProjectId
);
opaque_id!(
    /// Backend identifier of an issue template.
    TemplateId
);
opaque_id!(
    /// Backend identifier of an existing issue used as a parent.
    ParentIssueId
);
opaque_id!(
    /// Backend identifier of an issue.
    IssueId
);

/// Returns `true` when the value is already in the backend's native ID
/// format (a UUID) and needs no lookup.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::domain::looks_like_native_id;
///
/// assert!(looks_like_native_id("5f2b8d8e-4c1a-4f7e-9a53-0c6a3f1e2d11"));
/// assert!(!looks_like_native_id("Engineering"));
/// ```
#[must_use]
pub fn looks_like_native_id(value: &str) -> bool {
    Uuid::try_parse(value.trim()).is_ok()
}
