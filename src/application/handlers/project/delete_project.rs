//! DeleteProjectHandler - Command handler for removing a project.

use std::sync::Arc;

use crate::domain::foundation::{ProjectId, UserId};
use crate::domain::project::ProjectError;
use crate::ports::ProjectRepository;

#[derive(Debug, Clone)]
pub struct DeleteProjectCommand {
    pub user_id: UserId,
    pub project_id: ProjectId,
}

pub struct DeleteProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl DeleteProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, cmd: DeleteProjectCommand) -> Result<(), ProjectError> {
        let project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(ProjectError::not_found(cmd.project_id))?;

        if !project.is_owned_by(&cmd.user_id) {
            return Err(ProjectError::forbidden());
        }

        self.projects.delete(&cmd.project_id).await?;
        tracing::info!(project_id = %cmd.project_id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProjectRepository;
    use crate::application::handlers::project::test_support::{new_project, owner, stranger};
    use crate::domain::foundation::ProfileId;
    use crate::domain::project::Project;

    #[tokio::test]
    async fn owner_deletes_project() {
        let project =
            Project::new(ProfileId::for_user(&owner()), new_project("Deck", true)).unwrap();
        let repo = Arc::new(InMemoryProjectRepository::with_projects(vec![project.clone()]));
        let handler = DeleteProjectHandler::new(repo.clone());

        handler
            .handle(DeleteProjectCommand {
                user_id: owner(),
                project_id: project.id(),
            })
            .await
            .unwrap();

        assert!(repo.find_by_id(&project.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stranger_cannot_delete() {
        let project =
            Project::new(ProfileId::for_user(&owner()), new_project("Deck", true)).unwrap();
        let repo = Arc::new(InMemoryProjectRepository::with_projects(vec![project.clone()]));
        let handler = DeleteProjectHandler::new(repo.clone());

        let result = handler
            .handle(DeleteProjectCommand {
                user_id: stranger(),
                project_id: project.id(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ProjectError::Forbidden);
        assert!(repo.find_by_id(&project.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let handler = DeleteProjectHandler::new(Arc::new(InMemoryProjectRepository::new()));
        let id = ProjectId::new();

        let result = handler
            .handle(DeleteProjectCommand {
                user_id: owner(),
                project_id: id,
            })
            .await;

        assert_eq!(result.unwrap_err(), ProjectError::NotFound(id));
    }
}
