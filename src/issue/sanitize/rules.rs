//! Individual sanitizer rules.
//!
//! Each security category is a standalone predicate. The `check_*`
//! functions compose them by field role: identifier fields get every check,
//! free text only the control-character check.

use crate::issue::domain::{FieldRole, IssueField, SecurityError, SecurityViolation, ValidationError};

const TRAVERSAL_SEQUENCES: [&str; 2] = ["../", "..\\"];
const COMMAND_PATTERNS: [&str; 8] = [";", "|", "&&", "`", "$(", "${", "<", ">"];
const LINE_WHITESPACE: [char; 3] = ['\n', '\r', '\t'];

/// Returns `true` when the value contains an ASCII control character in the
/// range 0x00 to 0x1F.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::sanitize::rules::contains_control_characters;
///
/// assert!(contains_control_characters("team\u{0}name"));
/// assert!(!contains_control_characters("Platform & Infra"));
/// ```
#[must_use]
pub fn contains_control_characters(value: &str) -> bool {
    value.chars().any(is_low_control)
}

/// Like [`contains_control_characters`], but tolerates line breaks and tabs.
#[must_use]
pub fn contains_non_whitespace_control_characters(value: &str) -> bool {
    value
        .chars()
        .any(|ch| is_low_control(ch) && !LINE_WHITESPACE.contains(&ch))
}

/// Returns `true` when the value contains a relative traversal sequence or
/// starts at an absolute filesystem root.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::sanitize::rules::contains_path_traversal;
///
/// assert!(contains_path_traversal("../../etc/passwd"));
/// assert!(contains_path_traversal("/etc/passwd"));
/// assert!(!contains_path_traversal("Web/Mobile"));
/// ```
#[must_use]
pub fn contains_path_traversal(value: &str) -> bool {
    let candidate = value.trim();
    TRAVERSAL_SEQUENCES
        .iter()
        .any(|sequence| candidate.contains(sequence))
        || candidate == ".."
        || candidate.ends_with("/..")
        || candidate.ends_with("\\..")
        || starts_at_filesystem_root(candidate)
}

/// Returns `true` when the value contains shell or command metacharacters.
///
/// # Examples
///
/// ```
/// use issuesmith::issue::sanitize::rules::contains_command_metacharacters;
///
/// assert!(contains_command_metacharacters("eng; rm -rf /"));
/// assert!(!contains_command_metacharacters("R&D"));
/// ```
#[must_use]
pub fn contains_command_metacharacters(value: &str) -> bool {
    COMMAND_PATTERNS
        .iter()
        .any(|pattern| value.contains(pattern))
}

/// Applies the control-character check to a free-text value.
///
/// # Errors
///
/// Returns a [`SecurityError`] tagged [`SecurityViolation::ControlCharacters`].
pub fn check_free_text(field: IssueField, value: &str) -> Result<(), SecurityError> {
    if contains_control_characters(value) {
        return Err(SecurityError::new(field, SecurityViolation::ControlCharacters));
    }
    Ok(())
}

/// Applies the control-character check to multi-line markdown content.
///
/// # Errors
///
/// Returns a [`SecurityError`] tagged [`SecurityViolation::ControlCharacters`]
/// for any control character other than a line break or tab.
pub fn check_multiline_text(field: IssueField, value: &str) -> Result<(), SecurityError> {
    if contains_non_whitespace_control_characters(value) {
        return Err(SecurityError::new(field, SecurityViolation::ControlCharacters));
    }
    Ok(())
}

/// Applies every security check to a lookup or identifier value.
///
/// Checks run in a fixed order: control characters, traversal, then
/// command metacharacters.
///
/// # Errors
///
/// Returns a [`SecurityError`] naming the first category that matched.
pub fn check_identifier(field: IssueField, value: &str) -> Result<(), SecurityError> {
    check_free_text(field, value)?;
    if contains_path_traversal(value) {
        return Err(SecurityError::new(field, SecurityViolation::PathTraversal));
    }
    if contains_command_metacharacters(value) {
        return Err(SecurityError::new(field, SecurityViolation::InvalidCharacters));
    }
    Ok(())
}

/// Applies the checks dictated by the field's role.
///
/// # Errors
///
/// Returns a [`SecurityError`] when any applicable check fails.
pub fn check_field(field: IssueField, value: &str) -> Result<(), SecurityError> {
    match (field, field.role()) {
        (IssueField::Description, _) => check_multiline_text(field, value),
        (_, FieldRole::FreeText) => check_free_text(field, value),
        (_, FieldRole::Identifier) => check_identifier(field, value),
    }
}

/// Rejects values longer than `limit` characters.
///
/// # Errors
///
/// Returns [`ValidationError::TextTooLong`] when the limit is exceeded.
pub fn check_length(field: IssueField, value: &str, limit: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > limit {
        return Err(ValidationError::TextTooLong {
            field,
            actual,
            limit,
        });
    }
    Ok(())
}

const fn is_low_control(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{1f}')
}

fn starts_at_filesystem_root(value: &str) -> bool {
    if value.starts_with('/') || value.starts_with('\\') || value.starts_with("~/") {
        return true;
    }
    let mut chars = value.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(drive), Some(':'), Some('/' | '\\')) if drive.is_ascii_alphabetic()
    )
}
