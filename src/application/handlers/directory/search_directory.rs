//! SearchDirectoryHandler - Query handler for browsing the directory.

use std::sync::Arc;

use crate::domain::directory::{search, FilterSpec};
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Query for a filtered, ordered view of the public directory.
#[derive(Debug, Clone, Default)]
pub struct SearchDirectoryQuery {
    pub filter: FilterSpec,
}

/// Matching profiles plus the filter that produced them.
#[derive(Debug, Clone)]
pub struct SearchDirectoryResult {
    pub profiles: Vec<Profile>,
    pub filter: FilterSpec,
    /// Number of public profiles before filtering.
    pub total: usize,
}

/// Handler for directory searches.
///
/// Hidden profiles never reach the engine.
pub struct SearchDirectoryHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl SearchDirectoryHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(
        &self,
        query: SearchDirectoryQuery,
    ) -> Result<SearchDirectoryResult, ProfileError> {
        let listed: Vec<Profile> = self
            .profiles
            .list_all()
            .await?
            .into_iter()
            .filter(Profile::is_public)
            .collect();

        let profiles: Vec<Profile> = search(&listed, &query.filter).into_iter().cloned().collect();

        tracing::debug!(
            total = listed.len(),
            matched = profiles.len(),
            sort_by = %query.filter.sort_by,
            "Directory search"
        );

        Ok(SearchDirectoryResult {
            profiles,
            filter: query.filter,
            total: listed.len(),
        })
    }
}
