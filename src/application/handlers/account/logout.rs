//! LogoutHandler - Revokes the caller's session.

use std::sync::Arc;

use crate::domain::session::AccessToken;
use crate::ports::IdentityProvider;

use super::AccountError;

#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub access_token: AccessToken,
}

pub struct LogoutHandler {
    identity: Arc<dyn IdentityProvider>,
}

impl LogoutHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, cmd: LogoutCommand) -> Result<(), AccountError> {
        self.identity.sign_out(&cmd.access_token).await?;
        tracing::info!("User signed out");
        Ok(())
    }
}
