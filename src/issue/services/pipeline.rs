//! Orchestration of the issue creation pipeline.

use crate::issue::{
    config::PipelineConfig,
    domain::{
        IssueRequest, IssueResult, PipelineStage, ProjectId, ResolvedFields, TemplateId,
        ValidatedIssueRequest,
    },
    ports::{IdentifierResolver, MutationTransport, ResolutionResult, TemplateResolver},
    sanitize::IssueSanitizer,
    services::{IssueCreationResult, MutationExecutor, project_issue_create},
};
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

/// Creates issues from untrusted requests.
///
/// Each call validates the request, resolves its references concurrently,
/// optionally applies the project's default template, sends one mutation
/// and projects the response. Calls share no mutable state.
#[derive(Clone)]
pub struct IssueCreationService<R, P, T>
where
    R: IdentifierResolver,
    P: TemplateResolver,
    T: MutationTransport,
{
    resolver: Arc<R>,
    templates: Arc<P>,
    executor: MutationExecutor<T>,
    sanitizer: IssueSanitizer,
}

impl<R, P, T> IssueCreationService<R, P, T>
where
    R: IdentifierResolver,
    P: TemplateResolver,
    T: MutationTransport,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(resolver: Arc<R>, templates: Arc<P>, transport: Arc<T>) -> Self {
        Self::with_config(resolver, templates, transport, PipelineConfig::default())
    }

    /// Creates a service with a custom configuration.
    #[must_use]
    pub const fn with_config(
        resolver: Arc<R>,
        templates: Arc<P>,
        transport: Arc<T>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            resolver,
            templates,
            executor: MutationExecutor::new(transport),
            sanitizer: IssueSanitizer::with_config(config),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        self.sanitizer.config()
    }

    /// Creates an issue.
    ///
    /// # Errors
    ///
    /// Returns [`crate::issue::services::IssueCreationError`] when the
    /// request is invalid, a reference cannot be resolved, the transport
    /// fails, or the API does not confirm creation. Template lookup failures
    /// are logged and never returned.
    pub async fn create_issue(&self, request: &IssueRequest) -> IssueCreationResult<IssueResult> {
        let span = info_span!("issue_create", team = ?request.team);
        self.run(request)
            .instrument(span)
            .await
            .inspect_err(|err| {
                debug!(stage = %err.stage(), error = %err, "issue creation failed");
            })
    }

    async fn run(&self, request: &IssueRequest) -> IssueCreationResult<IssueResult> {
        debug!(stage = %PipelineStage::Validating, "sanitizing request");
        let validated = self.sanitizer.validate(request)?;

        debug!(stage = %PipelineStage::Resolving, "resolving references");
        let mut resolved = self.resolve_references(&validated).await?;
        resolved.template_id = self
            .select_template(&validated, resolved.project_id.as_ref())
            .await;

        debug!(stage = %PipelineStage::Mutating, "creating issue");
        let raw = self.executor.execute(&validated, &resolved).await?;

        debug!(stage = %PipelineStage::Projecting, "projecting response");
        let result = project_issue_create(raw, self.config().chars_per_token)?;

        info!(
            stage = %PipelineStage::Done,
            identifier = %result.identifier,
            "issue created"
        );
        Ok(result)
    }

    async fn resolve_references(
        &self,
        request: &ValidatedIssueRequest,
    ) -> ResolutionResult<ResolvedFields> {
        let resolver = &*self.resolver;
        let team = resolver.resolve_team_id(request.team());
        let state = async {
            match request.state() {
                Some(state) => resolver.resolve_state_id(state).await.map(Some),
                None => Ok(None),
            }
        };
        let assignee = async {
            match request.assignee() {
                Some(assignee) => resolver.resolve_assignee_id(assignee).await.map(Some),
                None => Ok(None),
            }
        };
        let project = async {
            match request.project() {
                Some(project) => resolver.resolve_project_id(project).await.map(Some),
                None => Ok(None),
            }
        };

        let (team_id, state_id, assignee_id, project_id) =
            tokio::try_join!(team, state, assignee, project)?;
        Ok(ResolvedFields {
            team_id,
            state_id,
            assignee_id,
            project_id,
            template_id: None,
        })
    }

    /// An explicit template always wins; the project default is looked up
    /// only when requested and a project was resolved.
    async fn select_template(
        &self,
        request: &ValidatedIssueRequest,
        resolved_project: Option<&ProjectId>,
    ) -> Option<TemplateId> {
        if let Some(explicit) = request.template_id() {
            return Some(explicit.clone());
        }
        if !request.auto_apply_project_template() {
            return None;
        }
        let project_id = resolved_project?;

        debug!(
            stage = %PipelineStage::TemplateResolving,
            %project_id,
            "resolving project template"
        );
        match self.templates.resolve_template_for_project(project_id).await {
            Ok(template) => template,
            Err(err) => {
                warn!(
                    %project_id,
                    error = %err,
                    "project template lookup failed, creating issue without a template"
                );
                None
            }
        }
    }
}
