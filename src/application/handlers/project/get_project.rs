//! GetProjectHandler - Project page with its owner's summary.

use std::sync::Arc;

use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::profile::Profile;
use crate::domain::project::{Project, ProjectError};
use crate::ports::{ProfileRepository, ProjectRepository};

#[derive(Debug, Clone)]
pub struct GetProjectQuery {
    pub project_id: ProjectId,
    pub viewer: Option<UserId>,
}

#[derive(Debug, Clone)]
pub struct ProjectView {
    pub project: Project,
    /// `None` if the owning profile has disappeared or is hidden from the viewer.
    pub owner: Option<Profile>,
    pub is_owner: bool,
}

pub struct GetProjectHandler {
    profiles: Arc<dyn ProfileRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl GetProjectHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { profiles, projects }
    }

    /// Private projects are reported as not found to everyone but the owner.
    pub async fn handle(&self, query: GetProjectQuery) -> Result<ProjectView, ProjectError> {
        let project = self
            .projects
            .find_by_id(&query.project_id)
            .await?
            .filter(|project| project.is_visible_to(query.viewer.as_ref()))
            .ok_or(ProjectError::not_found(query.project_id))?;

        let is_owner = query
            .viewer
            .as_ref()
            .is_some_and(|viewer| project.is_owned_by(viewer));

        let owner = self
            .profiles
            .find_by_id(project.owner())
            .await?
            .filter(|profile| profile.is_public() || is_owner);

        Ok(ProjectView {
            project,
            owner,
            is_owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProfileRepository, InMemoryProjectRepository};
    use crate::application::handlers::project::test_support::{
        new_project, owner, owner_profile, stranger,
    };
    use crate::domain::foundation::ProfileId;

    fn setup(is_public: bool) -> (GetProjectHandler, ProjectId) {
        let project = Project::new(
            ProfileId::for_user(&owner()),
            new_project("Backyard Deck", is_public),
        )
        .unwrap();
        let id = project.id();
        let handler = GetProjectHandler::new(
            Arc::new(InMemoryProfileRepository::with_profiles(vec![owner_profile()])),
            Arc::new(InMemoryProjectRepository::with_projects(vec![project])),
        );
        (handler, id)
    }

    #[tokio::test]
    async fn anonymous_visitor_sees_public_project_with_owner() {
        let (handler, id) = setup(true);

        let view = handler
            .handle(GetProjectQuery {
                project_id: id,
                viewer: None,
            })
            .await
            .unwrap();

        assert_eq!(view.project.title(), "Backyard Deck");
        assert_eq!(view.owner.map(|p| p.full_name().to_string()).as_deref(), Some("Ana"));
        assert!(!view.is_owner);
    }

    #[tokio::test]
    async fn private_project_is_hidden_from_others() {
        let (handler, id) = setup(false);

        for viewer in [None, Some(stranger())] {
            let result = handler
                .handle(GetProjectQuery {
                    project_id: id,
                    viewer,
                })
                .await;
            assert_eq!(result.unwrap_err(), ProjectError::NotFound(id));
        }

        let view = handler
            .handle(GetProjectQuery {
                project_id: id,
                viewer: Some(owner()),
            })
            .await
            .unwrap();
        assert!(view.is_owner);
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let (handler, _) = setup(true);
        let missing = ProjectId::new();

        let result = handler
            .handle(GetProjectQuery {
                project_id: missing,
                viewer: None,
            })
            .await;

        assert_eq!(result.unwrap_err(), ProjectError::NotFound(missing));
    }
}
