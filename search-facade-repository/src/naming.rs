//! Index-name validation and normalization.

use crate::errors::OperationError;
use crate::types::Operation;

/// Characters an index name may not contain: ASCII punctuation other than
/// `_` and `-`, and the space character.
pub const DISALLOWED_CHARS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '`', '{', '|', '}', '~', ' ',
];

/// Whether `name` contains any disallowed character (or any whitespace).
pub fn contains_disallowed(name: &str) -> bool {
    name.chars()
        .any(|c| c.is_whitespace() || DISALLOWED_CHARS.contains(&c))
}

/// Prepend `prefix` to `name` unless it already starts with it.
pub fn normalize(name: &str, prefix: &str) -> String {
    if name.starts_with(prefix) {
        name.to_string()
    } else {
        format!("{}{}", prefix, name)
    }
}

/// Validate `name` for `operation` and return its normalized form.
pub fn resolve_index_name(
    name: &str,
    prefix: &str,
    operation: Operation,
) -> Result<String, OperationError> {
    if contains_disallowed(name) {
        return Err(OperationError::InvalidIndexName {
            index: name.to_string(),
            operation,
        });
    }
    Ok(normalize(name, prefix))
}
