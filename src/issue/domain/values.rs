//! Validated scalar values produced by the sanitizer.

use super::ValidationError;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Non-empty, trimmed issue title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IssueTitle(String);

impl IssueTitle {
    /// Creates a title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when nothing remains after
    /// trimming.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable name or native identifier that keys a resolver lookup.
///
/// Only the sanitizer constructs references, after the identifier-role
/// security checks have passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference(String);

impl Reference {
    pub(crate) fn new(value: &str) -> Self {
        Self(value.trim().to_owned())
    }

    /// Returns the reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assignee reference: the acting principal or a named user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssigneeRef {
    /// The acting principal (`me`).
    Me,
    /// A user name or native user identifier.
    Named(Reference),
}

impl AssigneeRef {
    const SELF_ALIAS: &'static str = "me";

    pub(crate) fn from_reference(reference: Reference) -> Self {
        if reference.as_str().eq_ignore_ascii_case(Self::SELF_ALIAS) {
            Self::Me
        } else {
            Self::Named(reference)
        }
    }
}

impl fmt::Display for AssigneeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Me => f.write_str(Self::SELF_ALIAS),
            Self::Named(reference) => write!(f, "{reference}"),
        }
    }
}

/// Issue priority in the closed range `0..=4`.
///
/// `0` means no priority, `1` urgent through `4` low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    /// Highest accepted priority value.
    pub const MAX: u8 = 4;

    /// Returns the numeric priority.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|candidate| *candidate <= Self::MAX)
            .map(Self)
            .ok_or(ValidationError::PriorityOutOfRange(value))
    }
}

/// Calendar due date, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DueDate(NaiveDate);

impl DueDate {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Parses an ISO calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDueDate`] when the value is not a
    /// valid `YYYY-MM-DD` date.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDueDate(value.to_owned()))
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
