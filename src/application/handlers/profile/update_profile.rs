//! UpdateProfileHandler - Command handler for owner edits to a profile.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{Profile, ProfileError, ProfileUpdate};
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub update: ProfileUpdate,
}

pub struct UpdateProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl UpdateProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Applies the update to the caller's own profile and returns the stored result.
    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Profile, ProfileError> {
        let profile_id = ProfileId::for_user(&cmd.user_id);
        let mut profile = self
            .profiles
            .find_by_id(&profile_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(profile_id.as_str()))?;

        if !profile.is_owner(&cmd.user_id) {
            return Err(ProfileError::forbidden());
        }

        if cmd.update.is_empty() {
            return Ok(profile);
        }

        profile.apply(cmd.update)?;
        self.profiles.update(&profile).await?;

        tracing::info!(profile_id = %profile.id(), "Profile updated");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;
    use crate::domain::foundation::{DomainError, ErrorCode, Slug};
    use crate::domain::profile::{Industry, NewProfile};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn user() -> UserId {
        UserId::new("usr-ana").unwrap()
    }

    fn registered() -> Profile {
        Profile::register(
            &user(),
            Slug::parse("ana").unwrap(),
            "ana@example.com",
            NewProfile {
                username: "ana".to_string(),
                full_name: "Ana".to_string(),
                company_name: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn applies_and_persists_update() {
        let repo = Arc::new(InMemoryProfileRepository::with_profiles(vec![registered()]));
        let handler = UpdateProfileHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateProfileCommand {
                user_id: user(),
                update: ProfileUpdate {
                    industry: Some("Construction".to_string()),
                    bio: Some("Decks and patios".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.industry(), Some(Industry::Construction));
        let stored = repo.find_by_id(updated.id()).await.unwrap().unwrap();
        assert_eq!(stored.bio(), Some("Decks and patios"));
    }

    #[tokio::test]
    async fn invalid_update_is_rejected_and_not_stored() {
        let repo = Arc::new(InMemoryProfileRepository::with_profiles(vec![registered()]));
        let handler = UpdateProfileHandler::new(repo.clone());

        let result = handler
            .handle(UpdateProfileCommand {
                user_id: user(),
                update: ProfileUpdate {
                    full_name: Some("  ".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProfileError::ValidationFailed { .. })));
        let stored = repo
            .find_by_id(&ProfileId::for_user(&user()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.full_name(), "Ana");
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let handler = UpdateProfileHandler::new(Arc::new(InMemoryProfileRepository::new()));

        let result = handler
            .handle(UpdateProfileCommand {
                user_id: user(),
                update: ProfileUpdate::default(),
            })
            .await;

        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }

    struct CountingRepository {
        profile: Profile,
        updates: Mutex<u32>,
    }

    #[async_trait]
    impl ProfileRepository for CountingRepository {
        async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
            Ok(vec![self.profile.clone()])
        }
        async fn find_by_slug(&self, _slug: &Slug) -> Result<Option<Profile>, DomainError> {
            Ok(None)
        }
        async fn find_by_id(&self, _id: &ProfileId) -> Result<Option<Profile>, DomainError> {
            Ok(Some(self.profile.clone()))
        }
        async fn create(&self, _profile: &Profile) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::ProfileAlreadyExists, "exists"))
        }
        async fn update(&self, _profile: &Profile) -> Result<(), DomainError> {
            *self.updates.lock().unwrap() += 1;
            Ok(())
        }
        async fn slug_exists(&self, _slug: &Slug) -> Result<bool, DomainError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn empty_update_skips_the_store() {
        let repo = Arc::new(CountingRepository {
            profile: registered(),
            updates: Mutex::new(0),
        });
        let handler = UpdateProfileHandler::new(repo.clone());

        handler
            .handle(UpdateProfileCommand {
                user_id: user(),
                update: ProfileUpdate::default(),
            })
            .await
            .unwrap();

        assert_eq!(*repo.updates.lock().unwrap(), 0);
    }
}
