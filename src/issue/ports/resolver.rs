//! Identifier resolution port.

use crate::issue::domain::{AssigneeRef, ProjectId, Reference, TeamId, UserId, WorkflowStateId};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identifier resolution.
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Maps human-readable references to opaque backend identifiers.
///
/// Implementations must resolve a value already in the backend's native ID
/// format (see [`crate::issue::domain::looks_like_native_id`]) to itself
/// without a lookup, so callers cannot assume every call reaches the
/// network.
#[async_trait]
pub trait IdentifierResolver: Send + Sync {
    /// Resolves a team name, key, or identifier.
    async fn resolve_team_id(&self, team: &Reference) -> ResolutionResult<TeamId>;

    /// Resolves a workflow state name or identifier.
    async fn resolve_state_id(&self, state: &Reference) -> ResolutionResult<WorkflowStateId>;

    /// Resolves an assignee; [`AssigneeRef::Me`] maps to the acting
    /// principal.
    async fn resolve_assignee_id(&self, assignee: &AssigneeRef) -> ResolutionResult<UserId>;

    /// Resolves a project name or identifier.
    async fn resolve_project_id(&self, project: &Reference) -> ResolutionResult<ProjectId>;
}

/// Kind of reference being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// Team reference.
    Team,
    /// Workflow state reference.
    State,
    /// Assignee reference.
    Assignee,
    /// Project reference.
    Project,
}

impl ReferenceKind {
    /// Returns the kind name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::State => "state",
            Self::Assignee => "assignee",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by identifier resolvers.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// No backend entity matches the reference.
    #[error("{kind} '{value}' not found")]
    NotFound {
        /// Kind of reference.
        kind: ReferenceKind,
        /// The reference as supplied.
        value: String,
    },

    /// More than one backend entity matches the reference.
    #[error("{kind} '{value}' is ambiguous, {matches} entities match")]
    Ambiguous {
        /// Kind of reference.
        kind: ReferenceKind,
        /// The reference as supplied.
        value: String,
        /// Number of matching entities.
        matches: usize,
    },

    /// The lookup data source failed.
    #[error("{kind} lookup failed: {cause}")]
    Lookup {
        /// Kind of reference.
        kind: ReferenceKind,
        /// Underlying failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl ResolutionError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(kind: ReferenceKind, value: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            value: value.into(),
        }
    }

    /// Wraps a data source failure.
    #[must_use]
    pub fn lookup(kind: ReferenceKind, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup {
            kind,
            cause: Arc::new(err),
        }
    }

    /// Returns the kind of reference that failed to resolve.
    #[must_use]
    pub const fn kind(&self) -> ReferenceKind {
        match self {
            Self::NotFound { kind, .. } | Self::Ambiguous { kind, .. } | Self::Lookup { kind, .. } => {
                *kind
            }
        }
    }
}
