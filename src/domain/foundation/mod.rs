//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Showcase domain.

mod auth;
mod errors;
mod ids;
mod slug;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PhotoId, ProfileId, ProjectId, UserId};
pub use slug::{fold_latin, Slug, MAX_SLUG_LENGTH};
pub use timestamp::Timestamp;

/// Normalizes optional free text: trims whitespace and maps blank input to `None`.
///
/// Used wherever the original data conflated "absent" with "empty string".
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Normalizes a list of free-text entries: trims, drops blanks, removes duplicates
/// while preserving first-seen order.
pub fn clean_entries(values: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if !trimmed.is_empty() && !cleaned.iter().any(|v| v == trimmed) {
            cleaned.push(trimmed.to_string());
        }
    }
    cleaned
}
