//! Error types raised while validating and sanitizing issue requests.

use super::IssueField;
use thiserror::Error;

/// Structural problems with an issue request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The request payload could not be decoded.
    #[error("malformed issue request: {0}")]
    MalformedRequest(String),

    /// The issue title is missing or empty after trimming.
    #[error("issue title must not be empty")]
    EmptyTitle,

    /// No team reference was supplied.
    #[error("team is required")]
    MissingTeam,

    /// The priority lies outside the closed range `0..=4`.
    #[error("priority {0} is out of range, expected an integer between 0 and 4")]
    PriorityOutOfRange(i64),

    /// The due date is not an ISO `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// A text field exceeds the configured length limit.
    #[error("{field} is {actual} characters long, exceeds limit of {limit}")]
    TextTooLong {
        /// The offending field.
        field: IssueField,
        /// Length of the supplied value in characters.
        actual: usize,
        /// Maximum allowed length in characters.
        limit: usize,
    },

    /// More labels were supplied than the configured maximum.
    #[error("{actual} labels supplied, exceeds limit of {limit}")]
    TooManyLabels {
        /// Number of labels supplied.
        actual: usize,
        /// Maximum number of labels accepted.
        limit: usize,
    },
}

/// Category of unsafe content detected in a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityViolation {
    /// ASCII control characters (0x00 to 0x1F).
    ControlCharacters,
    /// Relative traversal sequences or absolute filesystem roots.
    PathTraversal,
    /// Shell or command metacharacters.
    InvalidCharacters,
}

impl SecurityViolation {
    /// Returns the stable tag for the violation category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ControlCharacters => "control-characters",
            Self::PathTraversal => "traversal",
            Self::InvalidCharacters => "invalid-characters",
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::ControlCharacters => "contains control characters",
            Self::PathTraversal => "contains a path traversal sequence",
            Self::InvalidCharacters => "contains invalid characters",
        }
    }
}

/// Unsafe content detected in a request field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("security check failed: {field} {}", .violation.describe())]
pub struct SecurityError {
    field: IssueField,
    violation: SecurityViolation,
}

impl SecurityError {
    /// Creates a security error for the given field and category.
    #[must_use]
    pub const fn new(field: IssueField, violation: SecurityViolation) -> Self {
        Self { field, violation }
    }

    /// Returns the field that failed the check.
    #[must_use]
    pub const fn field(&self) -> IssueField {
        self.field
    }

    /// Returns the category of the violation.
    #[must_use]
    pub const fn violation(&self) -> SecurityViolation {
        self.violation
    }
}

/// Errors returned by the request sanitizer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SanitizeError {
    /// The request is structurally invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A field value failed a security check.
    #[error(transparent)]
    Security(#[from] SecurityError),
}

/// Result type for sanitizer operations.
pub type SanitizeResult<T> = Result<T, SanitizeError>;
