//! GetOwnProfileHandler - The signed-in professional's dashboard view.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{Profile, ProfileError};
use crate::domain::project::Project;
use crate::ports::{ProfileRepository, ProjectRepository};

#[derive(Debug, Clone)]
pub struct GetOwnProfileQuery {
    pub user_id: UserId,
}

/// The caller's profile with every project, public or not.
#[derive(Debug, Clone)]
pub struct OwnProfileView {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

pub struct GetOwnProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl GetOwnProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { profiles, projects }
    }

    pub async fn handle(&self, query: GetOwnProfileQuery) -> Result<OwnProfileView, ProfileError> {
        let profile_id = ProfileId::for_user(&query.user_id);
        // Project ownership is keyed by the same id, so both reads can overlap
        let (profile, projects) = futures::try_join!(
            self.profiles.find_by_id(&profile_id),
            self.projects.list_by_profile(&profile_id, false),
        )?;
        let profile = profile.ok_or_else(|| ProfileError::not_found(profile_id.as_str()))?;

        Ok(OwnProfileView { profile, projects })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProfileRepository, InMemoryProjectRepository};
    use crate::domain::foundation::Slug;
    use crate::domain::profile::NewProfile;
    use crate::domain::project::NewProject;
    use chrono::NaiveDate;

    fn user() -> UserId {
        UserId::new("usr-ana").unwrap()
    }

    fn project(title: &str, is_public: bool) -> Project {
        Project::new(
            ProfileId::for_user(&user()),
            NewProject {
                title: title.to_string(),
                description: String::new(),
                category: "Decks".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                location: None,
                client_name: None,
                is_public,
                photos: vec![],
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_profile_with_private_projects() {
        let profile = Profile::register(
            &user(),
            Slug::parse("ana").unwrap(),
            "ana@example.com",
            NewProfile {
                username: "ana".to_string(),
                full_name: "Ana".to_string(),
                company_name: None,
            },
        )
        .unwrap();
        let handler = GetOwnProfileHandler::new(
            Arc::new(InMemoryProfileRepository::with_profiles(vec![profile])),
            Arc::new(InMemoryProjectRepository::with_projects(vec![
                project("Public deck", true),
                project("Draft", false),
            ])),
        );

        let view = handler
            .handle(GetOwnProfileQuery { user_id: user() })
            .await
            .unwrap();

        assert_eq!(view.profile.full_name(), "Ana");
        assert_eq!(view.projects.len(), 2);
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let handler = GetOwnProfileHandler::new(
            Arc::new(InMemoryProfileRepository::new()),
            Arc::new(InMemoryProjectRepository::new()),
        );

        let result = handler.handle(GetOwnProfileQuery { user_id: user() }).await;

        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }
}
