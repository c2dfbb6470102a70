//! Identity-provider events.
//!
//! The identity provider broadcasts these whenever the signed-in account
//! changes. Subscribers apply them to their own session state.

use crate::domain::foundation::{AuthenticatedUser, UserId};

use super::AccessToken;

// ════════════════════════════════════════════════════════════════════════════
// AuthEvent
// ════════════════════════════════════════════════════════════════════════════

/// Change in the provider-side session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// An account signed in (or a stored session was restored).
    SignedIn {
        identity: AuthenticatedUser,
        access_token: AccessToken,
    },

    /// An account signed out or its session was revoked.
    SignedOut { user_id: UserId },

    /// The access token was rotated for the same account.
    TokenRefreshed {
        user_id: UserId,
        access_token: AccessToken,
    },

    /// Account metadata (email, display name) changed.
    UserUpdated { identity: AuthenticatedUser },
}

impl AuthEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            AuthEvent::SignedIn { .. } => "auth.signed_in",
            AuthEvent::SignedOut { .. } => "auth.signed_out",
            AuthEvent::TokenRefreshed { .. } => "auth.token_refreshed",
            AuthEvent::UserUpdated { .. } => "auth.user_updated",
        }
    }

    /// The account the event is about.
    pub fn user_id(&self) -> &UserId {
        match self {
            AuthEvent::SignedIn { identity, .. } | AuthEvent::UserUpdated { identity } => {
                &identity.id
            }
            AuthEvent::SignedOut { user_id } | AuthEvent::TokenRefreshed { user_id, .. } => user_id,
        }
    }
}
