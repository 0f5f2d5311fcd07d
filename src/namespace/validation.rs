//! Name validation and normalization for users, folders and files.

use thiserror::Error;

/// Characters that may not appear anywhere in a name.
pub const FORBIDDEN_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '&', '*', '(', ')', '^', '~', '+', '.', '=', ',', '-', '/', '\\', '[',
    ']', '{', '}', ';', ':', '\'', '"', '<', '>', '?',
];

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name contains one of the forbidden characters.
    #[error("the {0} contain invalid chars")]
    InvalidChars(String),
}

/// Check if a character is forbidden in names.
pub fn is_forbidden_char(c: char) -> bool {
    FORBIDDEN_CHARS.contains(&c)
}

/// Validate a user, folder or file name.
///
/// Rejects any name containing a character from [`FORBIDDEN_CHARS`],
/// wherever it appears. Nothing else is checked.
///
/// # Examples
///
/// ```
/// use vfs::namespace::validate_name;
///
/// assert!(validate_name("project_notes").is_ok());
/// assert!(validate_name("report.txt").is_err());
/// assert!(validate_name("a-b").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().any(is_forbidden_char) {
        return Err(ValidationError::InvalidChars(name.to_string()));
    }
    Ok(())
}

/// Normalize a name for storage and lookup.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
