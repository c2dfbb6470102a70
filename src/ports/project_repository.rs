//! Project repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, ProjectId};
use crate::domain::project::Project;

/// Repository port for Project persistence, photos included.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Projects owned by a profile, newest project date first.
    ///
    /// With `only_public`, private projects are left out.
    async fn list_by_profile(
        &self,
        profile_id: &ProfileId,
        only_public: bool,
    ) -> Result<Vec<Project>, DomainError>;

    /// Find a project by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Save a new project with its photos.
    async fn create(&self, project: &Project) -> Result<(), DomainError>;

    /// Replace an existing project, including its photo list.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Delete a project and its photos.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProjectRepository) {}
    }
}
