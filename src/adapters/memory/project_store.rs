//! In-memory project repository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, ProjectId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

use super::lock_poisoned;

/// Project store held in process memory.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
        }
    }
}

fn not_found(id: &ProjectId) -> DomainError {
    DomainError::new(ErrorCode::ProjectNotFound, format!("Project {} not found", id))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_by_profile(
        &self,
        profile_id: &ProfileId,
        only_public: bool,
    ) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().map_err(lock_poisoned)?;
        let mut owned: Vec<Project> = projects
            .iter()
            .filter(|p| p.owner() == profile_id && (!only_public || p.is_public()))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.date().cmp(&a.date()));
        Ok(owned)
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().map_err(lock_poisoned)?;
        Ok(projects.iter().find(|p| p.id() == *id).cloned())
    }

    async fn create(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().map_err(lock_poisoned)?;
        if projects.iter().any(|p| p.id() == project.id()) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Project {} already exists", project.id()),
            ));
        }
        projects.push(project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().map_err(lock_poisoned)?;
        let existing = projects
            .iter_mut()
            .find(|p| p.id() == project.id())
            .ok_or_else(|| not_found(&project.id()))?;
        *existing = project.clone();
        Ok(())
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let mut projects = self.projects.write().map_err(lock_poisoned)?;
        let position = projects
            .iter()
            .position(|p| p.id() == *id)
            .ok_or_else(|| not_found(id))?;
        projects.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::project::NewProject;
    use chrono::NaiveDate;

    fn owner() -> ProfileId {
        ProfileId::for_user(&UserId::new("u1").unwrap())
    }

    fn project(title: &str, month: u32, is_public: bool) -> Project {
        Project::new(
            owner(),
            NewProject {
                title: title.to_string(),
                description: String::new(),
                category: "Renovation".to_string(),
                date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
                location: None,
                client_name: None,
                is_public,
                photos: vec![],
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn list_by_profile_filters_private_and_orders_by_date() {
        let repo = InMemoryProjectRepository::new();
        repo.create(&project("Older", 1, true)).await.unwrap();
        repo.create(&project("Hidden", 6, false)).await.unwrap();
        repo.create(&project("Newer", 3, true)).await.unwrap();

        let public: Vec<String> = repo
            .list_by_profile(&owner(), true)
            .await
            .unwrap()
            .iter()
            .map(|p| p.title().to_string())
            .collect();
        assert_eq!(public, ["Newer", "Older"]);

        let all = repo.list_by_profile(&owner(), false).await.unwrap();
        assert_eq!(all[0].title(), "Hidden");
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_project() {
        let repo = InMemoryProjectRepository::new();
        let p = project("Deck", 1, true);
        repo.create(&p).await.unwrap();

        repo.delete(&p.id()).await.unwrap();
        assert!(repo.find_by_id(&p.id()).await.unwrap().is_none());

        let err = repo.delete(&p.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }

    #[tokio::test]
    async fn update_missing_project_fails() {
        let repo = InMemoryProjectRepository::new();
        let err = repo.update(&project("Ghost", 1, true)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }
}
