//! Configuration for the issue creation pipeline.

use std::num::NonZeroUsize;

/// Limits and tuning applied by the sanitizer and response projector.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::config::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.max_labels, 50);
///
/// let strict = PipelineConfig::strict();
/// assert!(strict.max_text_length < config.max_text_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum length of the title and description in characters.
    pub max_text_length: usize,
    /// Maximum number of labels per request.
    pub max_labels: usize,
    /// Characters counted as one token when estimating result size.
    pub chars_per_token: NonZeroUsize,
}

impl PipelineConfig {
    const DEFAULT_CHARS_PER_TOKEN: NonZeroUsize = match NonZeroUsize::new(4) {
        Some(ratio) => ratio,
        None => NonZeroUsize::MIN,
    };

    /// Creates a configuration with reduced limits.
    ///
    /// Useful for callers exposed to untrusted automation.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_text_length: 10_000,
            max_labels: 10,
            chars_per_token: Self::DEFAULT_CHARS_PER_TOKEN,
        }
    }

    /// Sets the maximum text length.
    #[must_use]
    pub const fn with_max_text_length(mut self, limit: usize) -> Self {
        self.max_text_length = limit;
        self
    }

    /// Sets the maximum number of labels.
    #[must_use]
    pub const fn with_max_labels(mut self, limit: usize) -> Self {
        self.max_labels = limit;
        self
    }

    /// Sets the characters-per-token ratio used for result size estimates.
    #[must_use]
    pub const fn with_chars_per_token(mut self, chars_per_token: NonZeroUsize) -> Self {
        self.chars_per_token = chars_per_token;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_text_length: 100_000,
            max_labels: 50,
            chars_per_token: Self::DEFAULT_CHARS_PER_TOKEN,
        }
    }
}
