//! GetDirectoryFacetsHandler - Option lists for the directory filter form.

use std::sync::Arc;

use crate::domain::directory::DirectoryFacets;
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone, Default)]
pub struct GetDirectoryFacetsQuery;

pub struct GetDirectoryFacetsHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetDirectoryFacetsHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(
        &self,
        _query: GetDirectoryFacetsQuery,
    ) -> Result<DirectoryFacets, ProfileError> {
        let profiles = self.profiles.list_all().await?;
        Ok(DirectoryFacets::collect(
            profiles.iter().filter(|p| Profile::is_public(p)),
        ))
    }
}
