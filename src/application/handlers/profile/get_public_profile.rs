//! GetPublicProfileHandler - A professional's page at `/users/:slug`.

use std::sync::Arc;

use crate::domain::foundation::{Slug, UserId};
use crate::domain::profile::{Profile, ProfileError};
use crate::domain::project::Project;
use crate::ports::{ProfileRepository, ProjectRepository};

#[derive(Debug, Clone)]
pub struct GetPublicProfileQuery {
    pub slug: String,
    /// Signed-in visitor, if any.
    pub viewer: Option<UserId>,
}

#[derive(Debug, Clone)]
pub struct PublicProfileView {
    pub profile: Profile,
    pub projects: Vec<Project>,
    /// True when the visitor owns this profile.
    pub is_owner: bool,
}

pub struct GetPublicProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl GetPublicProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { profiles, projects }
    }

    /// Hidden profiles and malformed slugs look the same as unknown ones,
    /// except to the owner.
    pub async fn handle(
        &self,
        query: GetPublicProfileQuery,
    ) -> Result<PublicProfileView, ProfileError> {
        let slug = Slug::parse(query.slug.as_str())
            .map_err(|_| ProfileError::not_found(query.slug.as_str()))?;

        let profile = self
            .profiles
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ProfileError::not_found(slug.as_str()))?;

        let is_owner = query
            .viewer
            .as_ref()
            .is_some_and(|viewer| profile.is_owner(viewer));

        if !profile.is_public() && !is_owner {
            return Err(ProfileError::not_found(slug.as_str()));
        }

        let projects = self.projects.list_by_profile(profile.id(), !is_owner).await?;

        Ok(PublicProfileView {
            profile,
            projects,
            is_owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProfileRepository, InMemoryProjectRepository};
    use crate::domain::foundation::ProfileId;
    use crate::domain::profile::{NewProfile, ProfileUpdate};
    use crate::domain::project::NewProject;
    use chrono::NaiveDate;

    fn owner() -> UserId {
        UserId::new("usr-ana").unwrap()
    }

    fn profile(public: bool) -> Profile {
        let mut profile = Profile::register(
            &owner(),
            Slug::parse("ana-builds").unwrap(),
            "ana@example.com",
            NewProfile {
                username: "ana".to_string(),
                full_name: "Ana Builds".to_string(),
                company_name: None,
            },
        )
        .unwrap();
        profile
            .apply(ProfileUpdate {
                is_public: Some(public),
                ..Default::default()
            })
            .unwrap();
        profile
    }

    fn project(title: &str, is_public: bool) -> Project {
        Project::new(
            ProfileId::for_user(&owner()),
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

    fn handler(public: bool) -> GetPublicProfileHandler {
        GetPublicProfileHandler::new(
            Arc::new(InMemoryProfileRepository::with_profiles(vec![profile(public)])),
            Arc::new(InMemoryProjectRepository::with_projects(vec![
                project("Deck", true),
                project("Draft", false),
            ])),
        )
    }

    fn query(slug: &str, viewer: Option<UserId>) -> GetPublicProfileQuery {
        GetPublicProfileQuery {
            slug: slug.to_string(),
            viewer,
        }
    }

    #[tokio::test]
    async fn visitors_see_only_public_projects() {
        let view = handler(true).handle(query("ana-builds", None)).await.unwrap();

        assert!(!view.is_owner);
        assert_eq!(view.projects.len(), 1);
        assert_eq!(view.projects[0].title(), "Deck");
    }

    #[tokio::test]
    async fn owner_sees_private_projects() {
        let view = handler(true)
            .handle(query("ana-builds", Some(owner())))
            .await
            .unwrap();

        assert!(view.is_owner);
        assert_eq!(view.projects.len(), 2);
    }

    #[tokio::test]
    async fn hidden_profile_is_not_found_for_visitors() {
        let stranger = UserId::new("usr-bob").unwrap();
        let result = handler(false).handle(query("ana-builds", Some(stranger))).await;
        assert!(matches!(result, Err(ProfileError::NotFound(_))));

        let view = handler(false)
            .handle(query("ana-builds", Some(owner())))
            .await
            .unwrap();
        assert!(!view.profile.is_public());
    }

    #[tokio::test]
    async fn malformed_slug_is_not_found() {
        let result = handler(true).handle(query("Not A Slug!", None)).await;
        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }
}
