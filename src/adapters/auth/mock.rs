//! Mock session validator for testing.
//!
//! Implements the `SessionValidator` port with a fixed token table, so HTTP
//! tests can authenticate without a real identity service.
//!
//! # Example
//!
//! ```ignore
//! use showcase::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_user("valid-token", "user-123");
//! let user = validator.validate("valid-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Mock session validator.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Returned for every validation when set
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a valid token for a generated user with the given ID.
    ///
    /// Invalid (blank) IDs are ignored.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let Ok(id) = UserId::new(&user_id) else {
            return self;
        };
        let user = AuthenticatedUser::new(
            id,
            format!("{}@test.example.com", user_id),
            Some(format!("Test Pro {}", user_id)),
            true,
        );
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = None;
        }
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.remove(token);
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.read().map(|t| t.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().map_err(poisoned)?.clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(poisoned)?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> AuthError {
    AuthError::service_unavailable("mock validator lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            "pro@example.com",
            Some("Pat Pro".to_string()),
            true,
        )
    }

    #[tokio::test]
    async fn returns_user_for_registered_token() {
        let validator = MockSessionValidator::new().with_user("valid-token", test_user());

        let user = validator.validate("valid-token").await.unwrap();

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "pro@example.com");
    }

    #[tokio::test]
    async fn returns_invalid_token_for_unknown() {
        let validator = MockSessionValidator::new();

        let result = validator.validate("unknown-token").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn with_test_user_creates_user() {
        let validator = MockSessionValidator::new().with_test_user("my-token", "user-456");

        let user = validator.validate("my-token").await.unwrap();

        assert_eq!(user.id.as_str(), "user-456");
        assert!(user.email.contains("user-456"));
    }

    #[tokio::test]
    async fn forced_error_wins_until_cleared() {
        let validator = MockSessionValidator::new()
            .with_user("valid-token", test_user())
            .with_error(AuthError::service_unavailable("down"));

        assert!(matches!(
            validator.validate("valid-token").await,
            Err(AuthError::ServiceUnavailable(_))
        ));

        validator.clear_error();
        assert!(validator.validate("valid-token").await.is_ok());
    }

    #[tokio::test]
    async fn removed_token_becomes_invalid() {
        let validator = MockSessionValidator::new().with_user("t", test_user());
        assert_eq!(validator.token_count(), 1);

        validator.remove_token("t");

        assert!(validator.validate("t").await.is_err());
        assert_eq!(validator.token_count(), 0);
    }
}
