//! UpdateProjectHandler - Owner edits, including gallery changes.

use std::sync::Arc;

use crate::domain::foundation::{PhotoId, ProjectId, UserId};
use crate::domain::project::{NewPhoto, Project, ProjectError, ProjectUpdate};
use crate::ports::ProjectRepository;

#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub update: ProjectUpdate,
    /// Appended to the end of the gallery.
    pub add_photos: Vec<NewPhoto>,
    /// Unknown ids are ignored.
    pub remove_photos: Vec<PhotoId>,
}

pub struct UpdateProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl UpdateProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, cmd: UpdateProjectCommand) -> Result<Project, ProjectError> {
        let mut project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(ProjectError::not_found(cmd.project_id))?;

        if !project.is_owned_by(&cmd.user_id) {
            tracing::warn!(
                project_id = %cmd.project_id,
                user_id = %cmd.user_id,
                "Rejected project update from non-owner"
            );
            return Err(ProjectError::forbidden());
        }

        project.apply(cmd.update)?;
        for photo_id in cmd.remove_photos {
            project.remove_photo(photo_id);
        }
        for photo in cmd.add_photos {
            project.add_photo(photo)?;
        }

        // Nothing is written unless every change above succeeded
        self.projects.update(&project).await?;
        tracing::info!(project_id = %project.id(), "Project updated");
        Ok(project)
    }
}
