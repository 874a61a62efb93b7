//! Service-level error taxonomy for issue creation.

use crate::issue::{
    domain::{PipelineStage, SanitizeError},
    ports::{ResolutionError, TransportError},
    services::ProjectionError,
};
use thiserror::Error;

/// Errors returned by the issue creation pipeline.
///
/// Resolver and transport failures are carried through with their original
/// message.
#[derive(Debug, Error)]
pub enum IssueCreationError {
    /// The request failed validation or a security check.
    #[error(transparent)]
    Sanitize(#[from] SanitizeError),

    /// A reference could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The mutation call failed at the transport level.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The mutation input could not be encoded.
    #[error("failed to encode issue creation input: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The mutation response reported failure or was malformed.
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl IssueCreationError {
    /// Returns the pipeline stage in which the failure occurred.
    #[must_use]
    pub const fn stage(&self) -> PipelineStage {
        match self {
            Self::Sanitize(_) => PipelineStage::Validating,
            Self::Resolution(_) => PipelineStage::Resolving,
            Self::Transport(_) | Self::Encoding(_) => PipelineStage::Mutating,
            Self::Projection(_) => PipelineStage::Projecting,
        }
    }
}

/// Result type for issue creation.
pub type IssueCreationResult<T> = Result<T, IssueCreationError>;
