//! In-process identity provider for the `memory` backend.
//!
//! Holds accounts and opaque session tokens in memory. It implements both
//! `IdentityProvider` and `SessionValidator`, so tokens it issues are
//! accepted by the HTTP auth middleware. Passwords are stored as salted
//! SHA-256 digests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::domain::session::{AccessToken, AuthEvent, AuthSession, Registration};
use crate::ports::{Credentials, IdentityProvider, SessionValidator};

use crate::adapters::memory::SeedAccount;

const EVENT_CAPACITY: usize = 32;

struct Account {
    identity: AuthenticatedUser,
    password_hash: String,
}

/// Identity provider backed by process memory.
pub struct InMemoryIdentityProvider {
    /// Keyed by normalized email
    accounts: RwLock<HashMap<String, Account>>,
    /// Token -> account email
    sessions: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<AuthEvent>,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            accounts: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            events,
        }
    }
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a confirmed account with a known id.
    ///
    /// Blank ids are ignored.
    pub fn with_account(
        self,
        id: &str,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Self {
        if let (Ok(user_id), Ok(mut accounts)) = (UserId::new(id), self.accounts.write()) {
            let key = normalize_email(email);
            let password_hash = hash_password(&user_id, password);
            accounts.insert(
                key.clone(),
                Account {
                    identity: AuthenticatedUser::new(user_id, key, display_name, true),
                    password_hash,
                },
            );
        }
        self
    }

    /// Registers every seed account.
    pub fn with_seed_accounts(self, accounts: &[SeedAccount]) -> Self {
        accounts.iter().fold(self, |provider, account| {
            provider.with_account(
                &account.id,
                &account.email,
                account.password.expose_secret(),
                account.display_name.clone(),
            )
        })
    }

    pub fn account_count(&self) -> usize {
        self.accounts.read().map(|a| a.len()).unwrap_or(0)
    }

    fn issue_session(&self, identity: &AuthenticatedUser) -> Result<AuthSession, AuthError> {
        let token = format!("mem-{}", Uuid::new_v4());
        self.sessions
            .write()
            .map_err(poisoned)?
            .insert(token.clone(), identity.email.clone());

        let access_token = AccessToken::new(token);
        self.publish(AuthEvent::SignedIn {
            identity: identity.clone(),
            access_token: access_token.clone(),
        });
        Ok(AuthSession {
            identity: identity.clone(),
            access_token,
            expires_at: None,
        })
    }

    fn publish(&self, event: AuthEvent) {
        tracing::debug!(event_type = event.event_type(), "Publishing auth event");
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    fn identity_for(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let email = self
            .sessions
            .read()
            .map_err(poisoned)?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)?;
        self.accounts
            .read()
            .map_err(poisoned)?
            .get(&email)
            .map(|account| account.identity.clone())
            .ok_or(AuthError::UserNotFound)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(user_id: &UserId, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> AuthError {
    AuthError::service_unavailable("identity store lock poisoned")
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        let key = normalize_email(&credentials.email);
        let identity = {
            let accounts = self.accounts.read().map_err(poisoned)?;
            let account = accounts.get(&key).ok_or(AuthError::InvalidCredentials)?;
            let attempt = hash_password(
                &account.identity.id,
                credentials.password.expose_secret(),
            );
            if attempt != account.password_hash {
                return Err(AuthError::InvalidCredentials);
            }
            account.identity.clone()
        };
        tracing::info!(user_id = %identity.id, "User signed in");
        self.issue_session(&identity)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Registration, AuthError> {
        let key = normalize_email(&credentials.email);
        let identity = {
            let mut accounts = self.accounts.write().map_err(poisoned)?;
            if accounts.contains_key(&key) {
                return Err(AuthError::EmailAlreadyRegistered);
            }
            let user_id = UserId::new(Uuid::new_v4().to_string())
                .map_err(|_| AuthError::service_unavailable("failed to allocate user id"))?;
            let identity = AuthenticatedUser::new(user_id, key.clone(), None, true);
            let password_hash =
                hash_password(&identity.id, credentials.password.expose_secret());
            accounts.insert(
                key,
                Account {
                    identity: identity.clone(),
                    password_hash,
                },
            );
            identity
        };
        tracing::info!(user_id = %identity.id, "Account created");
        let session = self.issue_session(&identity)?;
        Ok(Registration {
            identity,
            session: Some(session),
        })
    }

    async fn sign_out(&self, access_token: &AccessToken) -> Result<(), AuthError> {
        let removed = self
            .sessions
            .write()
            .map_err(poisoned)?
            .remove(access_token.expose());
        let email = removed.ok_or(AuthError::InvalidToken)?;
        let user_id = self
            .accounts
            .read()
            .map_err(poisoned)?
            .get(&email)
            .map(|account| account.identity.id.clone())
            .ok_or(AuthError::UserNotFound)?;
        self.publish(AuthEvent::SignedOut { user_id });
        Ok(())
    }

    async fn current_identity(
        &self,
        access_token: &AccessToken,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.identity_for(access_token.expose())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

#[async_trait]
impl SessionValidator for InMemoryIdentityProvider {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.identity_for(token)
    }
}
