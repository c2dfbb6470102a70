//! LoginHandler - Password sign-in.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::Profile;
use crate::domain::session::AuthSession;
use crate::ports::{Credentials, IdentityProvider, ProfileRepository};

use super::AccountError;

#[derive(Debug)]
pub struct LoginCommand {
    pub credentials: Credentials,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub session: AuthSession,
    /// `None` for accounts that never finished registration.
    pub profile: Option<Profile>,
}

pub struct LoginHandler {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
}

impl LoginHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { identity, profiles }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AccountError> {
        let session = self.identity.sign_in(&cmd.credentials).await.map_err(|e| {
            tracing::warn!(error = %e, "Sign-in failed");
            AccountError::from(e)
        })?;

        let profile = self
            .profiles
            .find_by_id(&ProfileId::for_user(&session.identity.id))
            .await?;

        Ok(LoginResult { session, profile })
    }
}
