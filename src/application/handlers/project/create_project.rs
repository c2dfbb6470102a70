//! CreateProjectHandler - Command handler for adding a portfolio project.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::project::{NewProject, Project, ProjectError};
use crate::ports::{ProfileRepository, ProjectRepository};

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub user_id: UserId,
    pub project: NewProject,
}

pub struct CreateProjectHandler {
    profiles: Arc<dyn ProfileRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl CreateProjectHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { profiles, projects }
    }

    pub async fn handle(&self, cmd: CreateProjectCommand) -> Result<Project, ProjectError> {
        // 1. The caller must already have a profile to own the project
        let owner = ProfileId::for_user(&cmd.user_id);
        if self.profiles.find_by_id(&owner).await?.is_none() {
            return Err(ProjectError::NoProfile);
        }

        // 2. Build and persist
        let project = Project::new(owner, cmd.project)?;
        self.projects.create(&project).await?;

        tracing::info!(
            project_id = %project.id(),
            owner = %project.owner(),
            photos = project.photos().len(),
            "Project created"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProfileRepository, InMemoryProjectRepository};
    use crate::application::handlers::project::test_support::{new_project, owner, owner_profile};

    #[tokio::test]
    async fn creates_project_for_profile_owner() {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let handler = CreateProjectHandler::new(
            Arc::new(InMemoryProfileRepository::with_profiles(vec![owner_profile()])),
            projects.clone(),
        );

        let project = handler
            .handle(CreateProjectCommand {
                user_id: owner(),
                project: new_project("Backyard Deck", true),
            })
            .await
            .unwrap();

        assert!(project.is_owned_by(&owner()));
        assert_eq!(project.photos().len(), 1);
        let stored = projects.find_by_id(&project.id()).await.unwrap();
        assert_eq!(stored.map(|p| p.title().to_string()).as_deref(), Some("Backyard Deck"));
    }

    #[tokio::test]
    async fn requires_existing_profile() {
        let handler = CreateProjectHandler::new(
            Arc::new(InMemoryProfileRepository::new()),
            Arc::new(InMemoryProjectRepository::new()),
        );

        let result = handler
            .handle(CreateProjectCommand {
                user_id: owner(),
                project: new_project("Deck", true),
            })
            .await;

        assert_eq!(result.unwrap_err(), ProjectError::NoProfile);
    }

    #[tokio::test]
    async fn rejects_blank_title() {
        let handler = CreateProjectHandler::new(
            Arc::new(InMemoryProfileRepository::with_profiles(vec![owner_profile()])),
            Arc::new(InMemoryProjectRepository::new()),
        );

        let result = handler
            .handle(CreateProjectCommand {
                user_id: owner(),
                project: new_project("   ", true),
            })
            .await;

        assert!(matches!(result, Err(ProjectError::ValidationFailed { .. })));
    }
}
