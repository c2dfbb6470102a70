//! Per-client session context.
//!
//! Holds the signed-in state for one client as an explicit object instead of
//! ambient global state. Consumers read the current [`SessionState`] or
//! subscribe to changes through a `watch` channel; the context starts in
//! `Loading` until [`SessionContext::restore`] or a sign-in settles it.
//!
//! ```text
//! Loading ──restore/sign_in──▶ Authenticated ──sign_out──▶ Anonymous
//!    └──────restore(None)─────────────────────────────────────▲
//! ```

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::{NewProfile, Profile, ProfileError, ProfileUpdate};
use crate::domain::session::{AccessToken, AuthEvent, CurrentUser, SessionState};
use crate::ports::{Credentials, IdentityProvider, ProfileRepository};

use super::handlers::{
    AccountError, LoginCommand, LoginHandler, LogoutCommand, LogoutHandler, RegisterCommand,
    RegisterHandler, RegisterResult, UpdateProfileCommand, UpdateProfileHandler,
};

/// Session state for a single client.
pub struct SessionContext {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
    state: Arc<watch::Sender<SessionState>>,
}

/// Background subscription to identity-provider events.
///
/// Dropping the listener (or calling [`SessionListener::shutdown`]) stops it.
pub struct SessionListener {
    task: JoinHandle<()>,
}

impl SessionListener {
    pub fn shutdown(self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SessionListener {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl SessionContext {
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileRepository>) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            identity,
            profiles,
            state: Arc::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Starts applying the identity provider's events to this context.
    ///
    /// Once signed in, events about other accounts are ignored.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> SessionListener {
        let mut events = self.identity.subscribe();
        let state = Arc::clone(&self.state);
        let profiles = Arc::clone(&self.profiles);

        let task = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => apply_event(&state, profiles.as_ref(), event).await,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Session listener fell behind auth events");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("Session listener stopped");
        });

        SessionListener { task }
    }

    /// Resolves a stored token (if any) into a settled state.
    ///
    /// Rejected tokens settle to `Anonymous`. If the identity service is
    /// unreachable the state also settles to `Anonymous` and the error is
    /// returned.
    pub async fn restore(&self, token: Option<AccessToken>) -> Result<SessionState, AccountError> {
        let Some(access_token) = token else {
            self.state.send_replace(SessionState::Anonymous);
            return Ok(SessionState::Anonymous);
        };

        match self.identity.current_identity(&access_token).await {
            Ok(identity) => {
                let profile =
                    load_profile(self.profiles.as_ref(), &ProfileId::for_user(&identity.id)).await;
                let next = SessionState::authenticated(CurrentUser {
                    identity,
                    access_token,
                    profile,
                });
                self.state.send_replace(next.clone());
                Ok(next)
            }
            Err(e) if e.requires_reauthentication() => {
                tracing::debug!(error = %e, "Stored session rejected");
                self.state.send_replace(SessionState::Anonymous);
                Ok(SessionState::Anonymous)
            }
            Err(e) => {
                self.state.send_replace(SessionState::Anonymous);
                Err(e.into())
            }
        }
    }

    /// Signs in and loads the account's profile.
    ///
    /// On failure the previous state is kept.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<CurrentUser, AccountError> {
        let result = LoginHandler::new(self.identity.clone(), self.profiles.clone())
            .handle(LoginCommand { credentials })
            .await?;

        let user = CurrentUser {
            identity: result.session.identity,
            access_token: result.session.access_token,
            profile: result.profile,
        };
        self.state.send_replace(SessionState::authenticated(user.clone()));
        Ok(user)
    }

    /// Registers an account and profile.
    ///
    /// The context becomes `Authenticated` only if the identity service issued
    /// a session right away.
    pub async fn sign_up(
        &self,
        credentials: Credentials,
        profile: NewProfile,
    ) -> Result<RegisterResult, AccountError> {
        let result = RegisterHandler::new(self.identity.clone(), self.profiles.clone())
            .handle(RegisterCommand {
                credentials,
                profile,
            })
            .await?;

        let next = match &result.session {
            Some(session) => SessionState::authenticated(CurrentUser {
                identity: session.identity.clone(),
                access_token: session.access_token.clone(),
                profile: Some(result.profile.clone()),
            }),
            None => SessionState::Anonymous,
        };
        self.state.send_replace(next);
        Ok(result)
    }

    /// Signs out. The context is `Anonymous` afterwards even if revocation fails.
    pub async fn sign_out(&self) -> Result<(), AccountError> {
        let previous = self.state.send_replace(SessionState::Anonymous);
        let Some(user) = previous.current_user() else {
            return Ok(());
        };

        match LogoutHandler::new(self.identity.clone())
            .handle(LogoutCommand {
                access_token: user.access_token.clone(),
            })
            .await
        {
            Ok(()) | Err(AccountError::Unauthenticated) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Updates the signed-in account's profile and refreshes the state.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, ProfileError> {
        let user_id = self
            .state
            .borrow()
            .user_id()
            .cloned()
            .ok_or_else(ProfileError::forbidden)?;

        let profile = UpdateProfileHandler::new(self.profiles.clone())
            .handle(UpdateProfileCommand { user_id, update })
            .await?;

        let updated = profile.clone();
        self.state.send_modify(move |state| {
            if let SessionState::Authenticated(user) = state {
                if updated.is_owner(user.user_id()) {
                    user.profile = Some(updated);
                }
            }
        });
        Ok(profile)
    }
}

async fn load_profile(profiles: &dyn ProfileRepository, id: &ProfileId) -> Option<Profile> {
    match profiles.find_by_id(id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(profile_id = %id, error = %e, "Failed to load profile for session");
            None
        }
    }
}

async fn apply_event(
    state: &watch::Sender<SessionState>,
    profiles: &dyn ProfileRepository,
    event: AuthEvent,
) {
    // A signed-in context only follows events about its own account
    let foreign = state
        .borrow()
        .user_id()
        .is_some_and(|current| current != event.user_id());
    if foreign {
        tracing::trace!(
            event_type = event.event_type(),
            "Ignoring auth event for another account"
        );
        return;
    }

    tracing::debug!(event_type = event.event_type(), "Applying auth event");
    match event {
        AuthEvent::SignedIn {
            identity,
            access_token,
        } => {
            let profile = load_profile(profiles, &ProfileId::for_user(&identity.id)).await;
            state.send_replace(SessionState::authenticated(CurrentUser {
                identity,
                access_token,
                profile,
            }));
        }
        AuthEvent::SignedOut { user_id } => {
            state.send_if_modified(|current| {
                if current.user_id() == Some(&user_id) {
                    *current = SessionState::Anonymous;
                    true
                } else {
                    false
                }
            });
        }
        AuthEvent::TokenRefreshed {
            user_id,
            access_token,
        } => {
            state.send_modify(move |current| {
                if let SessionState::Authenticated(user) = current {
                    if user.identity.id == user_id {
                        user.access_token = access_token;
                    }
                }
            });
        }
        AuthEvent::UserUpdated { identity } => {
            state.send_modify(move |current| {
                if let SessionState::Authenticated(user) = current {
                    if user.identity.id == identity.id {
                        user.identity = identity;
                    }
                }
            });
        }
    }
}
