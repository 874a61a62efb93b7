//! Stages of the issue creation pipeline.

use std::fmt;

/// Position of a request within the creation pipeline.
///
/// Requests move `Validating → Resolving → TemplateResolving → Mutating →
/// Projecting → Done`; template resolution is skipped when it does not
/// apply. A failure in any stage ends the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineStage {
    /// Sanitizing the raw request.
    Validating,
    /// Resolving team, state, assignee and project references.
    Resolving,
    /// Looking up the project's default template.
    TemplateResolving,
    /// Sending the creation mutation.
    Mutating,
    /// Projecting the raw mutation result.
    Projecting,
    /// The issue was created.
    Done,
}

impl PipelineStage {
    /// Returns the stage name used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Resolving => "resolving",
            Self::TemplateResolving => "template_resolving",
            Self::Mutating => "mutating",
            Self::Projecting => "projecting",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
