//! GetCurrentUserHandler - The signed-in account and its profile.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, ProfileId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

use super::AccountError;

#[derive(Debug, Clone)]
pub struct GetCurrentUserQuery {
    pub identity: AuthenticatedUser,
}

#[derive(Debug, Clone)]
pub struct CurrentUserView {
    pub identity: AuthenticatedUser,
    pub profile: Option<Profile>,
}

pub struct GetCurrentUserHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetCurrentUserHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetCurrentUserQuery) -> Result<CurrentUserView, AccountError> {
        let profile = self
            .profiles
            .find_by_id(&ProfileId::for_user(&query.identity.id))
            .await?;
        Ok(CurrentUserView {
            identity: query.identity,
            profile,
        })
    }
}
