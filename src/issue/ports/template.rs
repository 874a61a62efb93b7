//! Project template resolution port.

use crate::issue::domain::{ProjectId, TemplateId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for template resolution.
pub type TemplateResolutionResult<T> = Result<T, TemplateResolutionError>;

/// Looks up the default issue template configured for a project.
#[async_trait]
pub trait TemplateResolver: Send + Sync {
    /// Returns the project's default template, or `None` when it has none.
    async fn resolve_template_for_project(
        &self,
        project_id: &ProjectId,
    ) -> TemplateResolutionResult<Option<TemplateId>>;
}

/// Errors returned by template resolvers.
#[derive(Debug, Clone, Error)]
pub enum TemplateResolutionError {
    /// The template data source is not reachable.
    #[error("template service unavailable: {0}")]
    Unavailable(String),

    /// The template data source failed.
    #[error("template lookup failed: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TemplateResolutionError {
    /// Wraps a data source failure.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
