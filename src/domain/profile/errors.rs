//! Profile-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Profile errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No profile with the given slug or id.
    NotFound(String),
    /// Caller is not the profile owner.
    Forbidden,
    /// A profile already exists for this account.
    AlreadyExists,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Backend / storage error.
    Infrastructure(String),
}

impl ProfileError {
    pub fn not_found(key: impl Into<String>) -> Self {
        ProfileError::NotFound(key.into())
    }

    pub fn forbidden() -> Self {
        ProfileError::Forbidden
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProfileError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProfileError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::NotFound(_) => ErrorCode::ProfileNotFound,
            ProfileError::Forbidden => ErrorCode::Forbidden,
            ProfileError::AlreadyExists => ErrorCode::ProfileAlreadyExists,
            ProfileError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProfileError::Infrastructure(_) => ErrorCode::BackendError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProfileError::NotFound(key) => format!("Profile not found: {}", key),
            ProfileError::Forbidden => "Permission denied".to_string(),
            ProfileError::AlreadyExists => "A profile already exists for this account".to_string(),
            ProfileError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProfileError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProfileError {}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ProfileNotFound => ProfileError::NotFound(err.message),
            ErrorCode::Forbidden | ErrorCode::Unauthorized => ProfileError::Forbidden,
            ErrorCode::ProfileAlreadyExists => ProfileError::AlreadyExists,
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                ProfileError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => ProfileError::Infrastructure(err.to_string()),
        }
    }
}
