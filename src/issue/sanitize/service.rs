//! Request sanitizer.
//!
//! Turns an untrusted [`IssueRequest`] into a [`ValidatedIssueRequest`],
//! applying the rules in [`super::rules`] field by field. Validation is
//! fail-fast: the first failing check decides the error.

use crate::issue::{
    config::PipelineConfig,
    domain::{
        AssigneeRef, DueDate, IssueField, IssueRequest, IssueTitle, ParentIssueId, Priority,
        Reference, SanitizeResult, TemplateId, ValidatedIssueRequest, ValidationError,
    },
    sanitize::rules,
};

/// Pure, synchronous validator for issue creation requests.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::domain::IssueRequest;
/// use issuesmith::issue::sanitize::IssueSanitizer;
///
/// let sanitizer = IssueSanitizer::new();
/// let validated = sanitizer
///     .validate(&IssueRequest::new("  Broken build  ", "ENG"))
///     .expect("valid request");
/// assert_eq!(validated.title().as_str(), "Broken build");
///
/// assert!(sanitizer.validate(&IssueRequest::new("   ", "ENG")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IssueSanitizer {
    config: PipelineConfig,
}

impl IssueSanitizer {
    /// Creates a sanitizer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sanitizer with a custom configuration.
    #[must_use]
    pub const fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Validates and sanitizes a request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::issue::domain::SanitizeError::Validation`] for
    /// missing or out-of-range values and
    /// [`crate::issue::domain::SanitizeError::Security`] for unsafe content.
    pub fn validate(&self, request: &IssueRequest) -> SanitizeResult<ValidatedIssueRequest> {
        let title = self.validate_title(request.title.as_deref())?;
        let team = validate_team(request.team.as_deref())?;
        let description = self.validate_description(request.description.as_deref())?;
        let assignee = validate_reference(IssueField::Assignee, request.assignee.as_deref())?
            .map(AssigneeRef::from_reference);
        let state = validate_reference(IssueField::State, request.state.as_deref())?;
        let priority = request.priority.map(Priority::try_from).transpose()?;
        let project = validate_reference(IssueField::Project, request.project.as_deref())?;
        let labels = self.validate_labels(request.labels.as_deref())?;
        let due_date = validate_due_date(request.due_date.as_deref())?;
        let parent_id = validate_reference(IssueField::ParentId, request.parent_id.as_deref())?
            .map(|reference| ParentIssueId::new(reference.as_str()));
        let template_id =
            validate_reference(IssueField::TemplateId, request.template_id.as_deref())?
                .map(|reference| TemplateId::new(reference.as_str()));

        Ok(ValidatedIssueRequest {
            title,
            team,
            description,
            assignee,
            state,
            priority,
            project,
            labels,
            due_date,
            parent_id,
            template_id,
            auto_apply_project_template: request.auto_apply_project_template.unwrap_or(false),
        })
    }

    fn validate_title(&self, raw: Option<&str>) -> SanitizeResult<IssueTitle> {
        let value = raw.unwrap_or_default();
        rules::check_field(IssueField::Title, value)?;
        let title = IssueTitle::new(value)?;
        rules::check_length(IssueField::Title, title.as_str(), self.config.max_text_length)?;
        Ok(title)
    }

    fn validate_description(&self, raw: Option<&str>) -> SanitizeResult<Option<String>> {
        let Some(description) = raw else {
            return Ok(None);
        };
        rules::check_length(
            IssueField::Description,
            description,
            self.config.max_text_length,
        )?;
        rules::check_field(IssueField::Description, description)?;
        Ok(Some(description.to_owned()))
    }

    fn validate_labels(&self, raw: Option<&[String]>) -> SanitizeResult<Option<Vec<String>>> {
        let Some(labels) = raw else {
            return Ok(None);
        };
        if labels.len() > self.config.max_labels {
            return Err(ValidationError::TooManyLabels {
                actual: labels.len(),
                limit: self.config.max_labels,
            }
            .into());
        }

        let mut accepted = Vec::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            rules::check_field(IssueField::Label(index), label)?;
            let trimmed = label.trim();
            if !trimmed.is_empty() {
                accepted.push(trimmed.to_owned());
            }
        }
        Ok(Some(accepted))
    }
}

fn validate_team(raw: Option<&str>) -> SanitizeResult<Reference> {
    validate_reference(IssueField::Team, raw)?.ok_or_else(|| ValidationError::MissingTeam.into())
}

/// Checks the raw value first, so a reference made of control characters is
/// rejected rather than read as blank. Space-only references are absent.
fn validate_reference(field: IssueField, raw: Option<&str>) -> SanitizeResult<Option<Reference>> {
    let Some(value) = raw else {
        return Ok(None);
    };
    rules::check_field(field, value)?;
    if value.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(Reference::new(value)))
}

fn validate_due_date(raw: Option<&str>) -> SanitizeResult<Option<DueDate>> {
    let Some(value) = raw else {
        return Ok(None);
    };
    rules::check_field(IssueField::DueDate, value)?;
    Ok(Some(DueDate::parse(value)?))
}
