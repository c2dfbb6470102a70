//! Profile repository port.
//!
//! Defines the contract for storing and looking up directory profiles.
//! The backing store owns persistence; profiles are never deleted.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, Slug};
use crate::domain::profile::Profile;

/// Repository port for Profile persistence.
///
/// # Contract
///
/// - `slug` and `id` are unique across all profiles
/// - lookups return `Ok(None)` for missing records, never an error
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Every profile, public or not, in store order.
    async fn list_all(&self) -> Result<Vec<Profile>, DomainError>;

    /// Find a profile by its URL slug.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Profile>, DomainError>;

    /// Find a profile by id (the owning account's id).
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError>;

    /// Save a new profile.
    ///
    /// # Errors
    ///
    /// - `ProfileAlreadyExists` if a profile with this id exists
    /// - `SlugTaken` if the slug is in use
    /// - `BackendError` on persistence failure
    async fn create(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Replace an existing profile.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the profile doesn't exist
    /// - `BackendError` on persistence failure
    async fn update(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Check whether a slug is already taken.
    async fn slug_exists(&self, slug: &Slug) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProfileRepository) {}
    }
}
