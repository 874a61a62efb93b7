//! In-memory identifier and template directory.

use crate::issue::{
    domain::{
        AssigneeRef, ProjectId, Reference, TeamId, TemplateId, UserId, WorkflowStateId,
        looks_like_native_id,
    },
    ports::{
        IdentifierResolver, ReferenceKind, ResolutionError, ResolutionResult,
        TemplateResolutionError, TemplateResolutionResult, TemplateResolver,
    },
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Directory of teams, workflow states, users, projects and project
/// templates held in memory.
///
/// Names match case-insensitively; a team also matches its key. UUID-shaped
/// references are returned unchanged without counting as a lookup. The
/// directory is configured with builder methods before being shared.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::adapters::memory::InMemoryDirectory;
///
/// let directory = InMemoryDirectory::new()
///     .with_viewer("user-1", "Ada")
///     .with_team("team-eng", "Engineering", "ENG")
///     .with_project("project-web", "Website");
/// assert_eq!(directory.lookup_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    viewer: Option<String>,
    teams: Vec<DirectoryEntry>,
    states: Vec<DirectoryEntry>,
    users: Vec<DirectoryEntry>,
    projects: Vec<DirectoryEntry>,
    templates: HashMap<ProjectId, TemplateId>,
    template_failure: Option<String>,
    lookups: AtomicUsize,
    template_lookups: AtomicUsize,
}

#[derive(Debug, Clone)]
struct DirectoryEntry {
    id: String,
    aliases: Vec<String>,
}

impl DirectoryEntry {
    fn new(id: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            id: id.into(),
            aliases,
        }
    }

    fn matches(&self, reference: &str) -> bool {
        self.id == reference
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(reference))
    }
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the acting principal, which `me` resolves to.
    #[must_use]
    pub fn with_viewer(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let viewer_id = id.into();
        self.users
            .push(DirectoryEntry::new(viewer_id.clone(), vec![name.into()]));
        self.viewer = Some(viewer_id);
        self
    }

    /// Registers a team with its display name and short key.
    #[must_use]
    pub fn with_team(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.teams
            .push(DirectoryEntry::new(id, vec![name.into(), key.into()]));
        self
    }

    /// Registers a workflow state.
    #[must_use]
    pub fn with_state(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.states.push(DirectoryEntry::new(id, vec![name.into()]));
        self
    }

    /// Registers a user.
    #[must_use]
    pub fn with_user(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.users.push(DirectoryEntry::new(id, vec![name.into()]));
        self
    }

    /// Registers a project.
    #[must_use]
    pub fn with_project(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.projects.push(DirectoryEntry::new(id, vec![name.into()]));
        self
    }

    /// Sets the default template of a project.
    #[must_use]
    pub fn with_project_template(
        mut self,
        project_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        self.templates.insert(
            ProjectId::new(project_id),
            TemplateId::new(template_id),
        );
        self
    }

    /// Makes every template lookup fail with the given message.
    #[must_use]
    pub fn with_failing_templates(mut self, message: impl Into<String>) -> Self {
        self.template_failure = Some(message.into());
        self
    }

    /// Returns how many name lookups have been performed.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Returns how many template lookups have been performed.
    #[must_use]
    pub fn template_lookup_count(&self) -> usize {
        self.template_lookups.load(Ordering::Relaxed)
    }

    fn resolve(
        &self,
        kind: ReferenceKind,
        entries: &[DirectoryEntry],
        reference: &str,
    ) -> ResolutionResult<String> {
        if looks_like_native_id(reference) {
            return Ok(reference.to_owned());
        }
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let matches: Vec<&DirectoryEntry> = entries
            .iter()
            .filter(|entry| entry.matches(reference))
            .collect();
        match matches.as_slice() {
            [entry] => Ok(entry.id.clone()),
            [] => Err(ResolutionError::not_found(kind, reference)),
            many => Err(ResolutionError::Ambiguous {
                kind,
                value: reference.to_owned(),
                matches: many.len(),
            }),
        }
    }
}

#[async_trait]
impl IdentifierResolver for InMemoryDirectory {
    async fn resolve_team_id(&self, team: &Reference) -> ResolutionResult<TeamId> {
        self.resolve(ReferenceKind::Team, &self.teams, team.as_str())
            .map(TeamId::new)
    }

    async fn resolve_state_id(&self, state: &Reference) -> ResolutionResult<WorkflowStateId> {
        self.resolve(ReferenceKind::State, &self.states, state.as_str())
            .map(WorkflowStateId::new)
    }

    async fn resolve_assignee_id(&self, assignee: &AssigneeRef) -> ResolutionResult<UserId> {
        match assignee {
            AssigneeRef::Me => self
                .viewer
                .clone()
                .map(UserId::new)
                .ok_or_else(|| ResolutionError::not_found(ReferenceKind::Assignee, "me")),
            AssigneeRef::Named(name) => self
                .resolve(ReferenceKind::Assignee, &self.users, name.as_str())
                .map(UserId::new),
        }
    }

    async fn resolve_project_id(&self, project: &Reference) -> ResolutionResult<ProjectId> {
        self.resolve(ReferenceKind::Project, &self.projects, project.as_str())
            .map(ProjectId::new)
    }
}

#[async_trait]
impl TemplateResolver for InMemoryDirectory {
    async fn resolve_template_for_project(
        &self,
        project_id: &ProjectId,
    ) -> TemplateResolutionResult<Option<TemplateId>> {
        self.template_lookups.fetch_add(1, Ordering::Relaxed);
        if let Some(message) = &self.template_failure {
            return Err(TemplateResolutionError::Unavailable(message.clone()));
        }
        Ok(self.templates.get(project_id).cloned())
    }
}
