//! Session module - who is signed in, as seen by one client.
//!
//! - [`SessionState`] - `Loading`, `Anonymous`, or `Authenticated`
//! - [`AuthEvent`] - provider notifications that drive state changes

mod events;
mod state;

pub use events::AuthEvent;
pub use state::{AccessToken, AuthSession, CurrentUser, Registration, SessionState};
