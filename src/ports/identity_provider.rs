//! Identity provider port.
//!
//! Sign-in, sign-up and sign-out against the external identity service,
//! plus a broadcast stream of [`AuthEvent`]s for session holders.
//!
//! # When to Use
//!
//! - **SessionValidator**: validating bearer tokens on incoming requests
//! - **IdentityProvider**: performing account operations on behalf of a user

use async_trait::async_trait;
use secrecy::Secret;
use tokio::sync::broadcast;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::session::{AccessToken, AuthEvent, AuthSession, Registration};

/// Email and password supplied by the user.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }
}

/// Account operations backed by the identity service.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidCredentials` for a rejected email/password
/// - Return `AuthError::EmailAlreadyRegistered` on duplicate sign-up
/// - Return `AuthError::ServiceUnavailable` for transient errors
/// - Broadcast `SignedIn` / `SignedOut` after the corresponding operation
///   succeeds
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange credentials for a session.
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError>;

    /// Create a new account.
    async fn sign_up(&self, credentials: &Credentials) -> Result<Registration, AuthError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: &AccessToken) -> Result<(), AuthError>;

    /// Look up the account a token belongs to (session restore).
    async fn current_identity(
        &self,
        access_token: &AccessToken,
    ) -> Result<AuthenticatedUser, AuthError>;

    /// Subscribe to auth events. Dropping the receiver unsubscribes.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials::new("a@example.com", "hunter22");
        let debug = format!("{:?}", credentials);

        assert!(!debug.contains("hunter22"));
        assert_eq!(credentials.password.expose_secret(), "hunter22");
    }

    #[test]
    fn identity_provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn IdentityProvider>>();
    }
}
