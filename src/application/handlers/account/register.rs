//! RegisterHandler - Creates an account and its directory profile.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, Slug, ValidationError};
use crate::domain::profile::{validate_email, NewProfile, Profile, MAX_NAME_LENGTH};
use crate::domain::session::AuthSession;
use crate::ports::{Credentials, IdentityProvider, ProfileRepository};

use super::AccountError;

/// Upper bound on `base`, `base-2`, ... candidates tried for a new profile.
pub const MAX_SLUG_ATTEMPTS: u32 = 50;

#[derive(Debug)]
pub struct RegisterCommand {
    pub credentials: Credentials,
    pub profile: NewProfile,
}

#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub identity: AuthenticatedUser,
    /// `None` while the identity service waits for email confirmation.
    pub session: Option<AuthSession>,
    pub profile: Profile,
}

pub struct RegisterHandler {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
}

impl RegisterHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { identity, profiles }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<RegisterResult, AccountError> {
        // 1. Validate everything we can before an account exists
        let base = validate_registration(&cmd)?;

        // 2. Create the account with the identity service
        let registration = self.identity.sign_up(&cmd.credentials).await?;

        // 3. Pick a free public address
        let slug = self.free_slug(&base).await?;

        // 4. Create the profile, sharing the account's id
        let email = if registration.identity.email.is_empty() {
            cmd.credentials.email.as_str()
        } else {
            registration.identity.email.as_str()
        };
        let profile = Profile::register(&registration.identity.id, slug, email, cmd.profile)?;
        self.profiles.create(&profile).await.map_err(|e| {
            tracing::error!(
                user_id = %registration.identity.id,
                error = %e,
                "Account created but profile insert failed"
            );
            AccountError::from(e)
        })?;

        tracing::info!(
            user_id = %registration.identity.id,
            slug = %profile.slug(),
            "Professional registered"
        );

        Ok(RegisterResult {
            identity: registration.identity,
            session: registration.session,
            profile,
        })
    }

    async fn free_slug(&self, base: &Slug) -> Result<Slug, AccountError> {
        for n in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = base.with_suffix(n);
            if !self.profiles.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(AccountError::SlugUnavailable(base.to_string()))
    }
}

fn validate_registration(cmd: &RegisterCommand) -> Result<Slug, AccountError> {
    validate_email(&cmd.credentials.email)?;

    let full_name = cmd.profile.full_name.trim();
    if full_name.is_empty() {
        return Err(ValidationError::empty_field("full_name").into());
    }
    let len = full_name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::too_long("full_name", MAX_NAME_LENGTH, len).into());
    }

    if cmd.profile.username.trim().is_empty() {
        return Err(ValidationError::empty_field("username").into());
    }
    Slug::from_text(&cmd.profile.username)
        .map_err(|_| AccountError::validation("username", "must contain letters or digits"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::InMemoryIdentityProvider;
    use crate::adapters::memory::InMemoryProfileRepository;
    use crate::domain::foundation::{AuthError, UserId};
    use crate::domain::session::{AccessToken, AuthEvent, Registration};
    use async_trait::async_trait;
    use tokio::sync::broadcast;

    fn command(email: &str, username: &str) -> RegisterCommand {
        RegisterCommand {
            credentials: Credentials::new(email, "correct horse"),
            profile: NewProfile {
                username: username.to_string(),
                full_name: "Ana Builds".to_string(),
                company_name: Some("Ana Builds LLC".to_string()),
            },
        }
    }

    fn handler() -> (RegisterHandler, Arc<InMemoryProfileRepository>) {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let handler = RegisterHandler::new(Arc::new(InMemoryIdentityProvider::new()), profiles.clone());
        (handler, profiles)
    }

    #[tokio::test]
    async fn registers_account_and_public_profile() {
        let (handler, profiles) = handler();

        let result = handler
            .handle(command("ana@example.com", "Ana Builds"))
            .await
            .unwrap();

        assert!(result.session.is_some());
        assert_eq!(result.profile.slug().as_str(), "ana-builds");
        assert!(result.profile.is_owner(&result.identity.id));
        assert!(result.profile.is_public());
        assert_eq!(result.profile.company_name(), Some("Ana Builds LLC"));
        assert_eq!(profiles.len(), 1);
    }

    #[tokio::test]
    async fn colliding_usernames_get_numbered_slugs() {
        let (handler, _) = handler();

        let first = handler.handle(command("a@example.com", "ana")).await.unwrap();
        let second = handler.handle(command("b@example.com", "Ana")).await.unwrap();
        let third = handler.handle(command("c@example.com", "ANA!")).await.unwrap();

        assert_eq!(first.profile.slug().as_str(), "ana");
        assert_eq!(second.profile.slug().as_str(), "ana-2");
        assert_eq!(third.profile.slug().as_str(), "ana-3");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (handler, profiles) = handler();
        handler.handle(command("ana@example.com", "ana")).await.unwrap();

        let result = handler.handle(command("ana@example.com", "other")).await;

        assert_eq!(result.unwrap_err(), AccountError::EmailAlreadyRegistered);
        assert_eq!(profiles.len(), 1);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_identity_service() {
        let (handler, profiles) = handler();

        let bad_email = handler.handle(command("not-an-email", "ana")).await;
        assert!(matches!(bad_email, Err(AccountError::ValidationFailed { ref field, .. }) if field == "email"));

        let bad_username = handler.handle(command("ana@example.com", "!!!")).await;
        assert!(matches!(bad_username, Err(AccountError::ValidationFailed { ref field, .. }) if field == "username"));

        assert!(profiles.is_empty());
    }

    /// Identity service that requires email confirmation before issuing a session.
    struct ConfirmationRequiredProvider {
        events: broadcast::Sender<AuthEvent>,
    }

    #[async_trait]
    impl IdentityProvider for ConfirmationRequiredProvider {
        async fn sign_in(&self, _credentials: &Credentials) -> Result<AuthSession, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn sign_up(&self, credentials: &Credentials) -> Result<Registration, AuthError> {
            Ok(Registration {
                identity: AuthenticatedUser::new(
                    UserId::new("usr-pending").unwrap(),
                    credentials.email.clone(),
                    None,
                    false,
                ),
                session: None,
            })
        }

        async fn sign_out(&self, _access_token: &AccessToken) -> Result<(), AuthError> {
            Ok(())
        }

        async fn current_identity(
            &self,
            _access_token: &AccessToken,
        ) -> Result<AuthenticatedUser, AuthError> {
            Err(AuthError::InvalidToken)
        }

        fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
            self.events.subscribe()
        }
    }

    #[tokio::test]
    async fn pending_confirmation_still_creates_profile() {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let (events, _) = broadcast::channel(4);
        let handler = RegisterHandler::new(
            Arc::new(ConfirmationRequiredProvider { events }),
            profiles.clone(),
        );

        let result = handler.handle(command("new@example.com", "newbie")).await.unwrap();

        assert!(result.session.is_none());
        assert_eq!(result.profile.id().as_str(), "usr-pending");
        assert_eq!(profiles.len(), 1);
    }
}
