//! Session state machine.

use std::fmt;

use crate::domain::foundation::{AuthenticatedUser, Timestamp, UserId};
use crate::domain::profile::Profile;

/// Bearer token issued by the identity provider.
///
/// `Debug` is redacted so tokens never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Result of a successful sign-in or sign-up with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub identity: AuthenticatedUser,
    pub access_token: AccessToken,
    pub expires_at: Option<Timestamp>,
}

/// Result of creating an account.
///
/// `session` is `None` when the provider requires email confirmation before
/// the first sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub identity: AuthenticatedUser,
    pub session: Option<AuthSession>,
}

/// The signed-in account with its directory profile, if one exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub identity: AuthenticatedUser,
    pub access_token: AccessToken,
    pub profile: Option<Profile>,
}

impl CurrentUser {
    pub fn user_id(&self) -> &UserId {
        &self.identity.id
    }
}

/// Who, if anyone, is signed in.
///
/// ```text
/// Loading ──restore/sign-in──► Authenticated ──sign-out──► Anonymous
///    │                              ▲                          │
///    └────────no session────► Anonymous ◄──────sign-in─────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not yet known whether a session exists.
    #[default]
    Loading,
    Anonymous,
    Authenticated(Box<CurrentUser>),
}

impl SessionState {
    pub fn authenticated(user: CurrentUser) -> Self {
        SessionState::Authenticated(Box::new(user))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::Authenticated(user) => Some(user.as_ref()),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.current_user().map(CurrentUser::user_id)
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.current_user().and_then(|user| user.profile.as_ref())
    }
}
