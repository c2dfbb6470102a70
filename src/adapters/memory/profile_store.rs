//! In-memory profile repository.
//!
//! Backs the `memory` backend and tests. Profiles keep insertion order so
//! directory results are reproducible.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Slug};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

use super::lock_poisoned;

/// Profile store held in process memory.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with profiles (seed data, tests).
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
        let profiles = self.profiles.read().map_err(lock_poisoned)?;
        Ok(profiles.clone())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().map_err(lock_poisoned)?;
        Ok(profiles.iter().find(|p| p.slug() == slug).cloned())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().map_err(lock_poisoned)?;
        Ok(profiles.iter().find(|p| p.id() == id).cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().map_err(lock_poisoned)?;
        if profiles.iter().any(|p| p.id() == profile.id()) {
            return Err(DomainError::new(
                ErrorCode::ProfileAlreadyExists,
                format!("Profile {} already exists", profile.id()),
            ));
        }
        if profiles.iter().any(|p| p.slug() == profile.slug()) {
            return Err(DomainError::new(
                ErrorCode::SlugTaken,
                format!("Slug '{}' is already taken", profile.slug()),
            )
            .with_detail("field", "slug"));
        }
        profiles.push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().map_err(lock_poisoned)?;
        let existing = profiles
            .iter_mut()
            .find(|p| p.id() == profile.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    format!("Profile {} not found", profile.id()),
                )
            })?;
        *existing = profile.clone();
        Ok(())
    }

    async fn slug_exists(&self, slug: &Slug) -> Result<bool, DomainError> {
        let profiles = self.profiles.read().map_err(lock_poisoned)?;
        Ok(profiles.iter().any(|p| p.slug() == slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::profile::{NewProfile, ProfileUpdate};

    fn profile(user: &str, slug: &str) -> Profile {
        Profile::register(
            &UserId::new(user).unwrap(),
            Slug::parse(slug).unwrap(),
            "pro@example.com",
            NewProfile {
                username: user.to_string(),
                full_name: "Pat Pro".to_string(),
                company_name: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_then_find_by_slug_and_id() {
        let repo = InMemoryProfileRepository::new();
        let p = profile("u1", "pat-pro");
        repo.create(&p).await.unwrap();

        assert_eq!(repo.find_by_slug(p.slug()).await.unwrap(), Some(p.clone()));
        assert_eq!(repo.find_by_id(p.id()).await.unwrap(), Some(p.clone()));
        assert!(repo.slug_exists(p.slug()).await.unwrap());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_slug() {
        let repo = InMemoryProfileRepository::new();
        repo.create(&profile("u1", "pat-pro")).await.unwrap();

        let err = repo.create(&profile("u2", "pat-pro")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugTaken);
    }

    #[tokio::test]
    async fn create_rejects_second_profile_for_account() {
        let repo = InMemoryProfileRepository::new();
        repo.create(&profile("u1", "pat-pro")).await.unwrap();

        let err = repo.create(&profile("u1", "other")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileAlreadyExists);
    }

    #[tokio::test]
    async fn update_replaces_stored_profile() {
        let repo = InMemoryProfileRepository::new();
        let mut p = profile("u1", "pat-pro");
        repo.create(&p).await.unwrap();

        p.apply(ProfileUpdate {
            bio: Some("Updated".to_string()),
            ..Default::default()
        })
        .unwrap();
        repo.update(&p).await.unwrap();

        let stored = repo.find_by_id(p.id()).await.unwrap().unwrap();
        assert_eq!(stored.bio(), Some("Updated"));
    }

    #[tokio::test]
    async fn update_missing_profile_fails() {
        let repo = InMemoryProfileRepository::new();
        let err = repo.update(&profile("u1", "pat-pro")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }

    #[tokio::test]
    async fn list_all_keeps_insertion_order() {
        let repo = InMemoryProfileRepository::new();
        repo.create(&profile("u1", "first")).await.unwrap();
        repo.create(&profile("u2", "second")).await.unwrap();

        let slugs: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.slug().to_string())
            .collect();
        assert_eq!(slugs, ["first", "second"]);
        assert_eq!(repo.len(), 2);
    }
}
