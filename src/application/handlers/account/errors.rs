//! Errors for account flows (register, login, logout).

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};
use crate::domain::profile::ProfileError;

/// Shown to end users for any failed sign-in or sign-up attempt.
pub const GENERIC_AUTH_FAILURE: &str = "Authentication failed. Please try again.";

/// Account flow errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Email/password pair was rejected.
    InvalidCredentials,
    /// Sign-up with an email that already has an account.
    EmailAlreadyRegistered,
    /// Missing, invalid or expired session.
    Unauthenticated,
    /// No free slug could be derived from the username.
    SlugUnavailable(String),
    /// Registration input failed validation.
    ValidationFailed { field: String, message: String },
    /// Identity service could not be reached.
    ServiceUnavailable(String),
    /// Profile store failure.
    Infrastructure(String),
}

impl AccountError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AccountError::EmailAlreadyRegistered => ErrorCode::EmailAlreadyRegistered,
            AccountError::Unauthenticated => ErrorCode::Unauthorized,
            AccountError::SlugUnavailable(_) => ErrorCode::SlugTaken,
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
            AccountError::Infrastructure(_) => ErrorCode::BackendError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AccountError::InvalidCredentials => "Invalid email or password".to_string(),
            AccountError::EmailAlreadyRegistered => "Email already registered".to_string(),
            AccountError::Unauthenticated => "Authentication required".to_string(),
            AccountError::SlugUnavailable(base) => {
                format!("No profile address available for '{}'", base)
            }
            AccountError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AccountError::ServiceUnavailable(msg) => format!("Auth service unavailable: {}", msg),
            AccountError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Message safe to show to the person signing in.
    ///
    /// Credential and availability failures collapse into one retryable
    /// message so the response does not reveal which part was wrong.
    pub fn public_message(&self) -> String {
        match self {
            AccountError::InvalidCredentials
            | AccountError::EmailAlreadyRegistered
            | AccountError::ServiceUnavailable(_)
            | AccountError::Infrastructure(_) => GENERIC_AUTH_FAILURE.to_string(),
            other => other.message(),
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccountError {}

impl From<AuthError> for AccountError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AccountError::InvalidCredentials,
            AuthError::EmailAlreadyRegistered => AccountError::EmailAlreadyRegistered,
            AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::UserNotFound
            | AuthError::InsufficientPermissions => AccountError::Unauthenticated,
            AuthError::ServiceUnavailable(msg) => AccountError::ServiceUnavailable(msg),
        }
    }
}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SlugTaken => AccountError::SlugUnavailable(
                err.details.get("slug").cloned().unwrap_or(err.message),
            ),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                AccountError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ProfileError> for AccountError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::ValidationFailed { field, message } => {
                AccountError::ValidationFailed { field, message }
            }
            ProfileError::NotFound(_) | ProfileError::Forbidden => AccountError::Unauthenticated,
            other => AccountError::Infrastructure(other.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_account_errors() {
        assert_eq!(
            AccountError::from(AuthError::InvalidCredentials),
            AccountError::InvalidCredentials
        );
        assert_eq!(
            AccountError::from(AuthError::TokenExpired),
            AccountError::Unauthenticated
        );
        assert!(matches!(
            AccountError::from(AuthError::service_unavailable("timeout")),
            AccountError::ServiceUnavailable(_)
        ));
    }

    #[test]
    fn credential_failures_use_generic_public_message() {
        assert_eq!(
            AccountError::InvalidCredentials.public_message(),
            GENERIC_AUTH_FAILURE
        );
        assert_eq!(
            AccountError::ServiceUnavailable("down".to_string()).public_message(),
            GENERIC_AUTH_FAILURE
        );
        assert!(AccountError::validation("username", "required")
            .public_message()
            .contains("username"));
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(AccountError::InvalidCredentials.code(), ErrorCode::InvalidCredentials);
        assert_eq!(AccountError::Unauthenticated.code(), ErrorCode::Unauthorized);
    }
}
