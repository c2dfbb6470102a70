//! Project repository backed by the hosted data API.
//!
//! Projects live in `/rest/v1/projects`; photos in `/rest/v1/photos` and are
//! embedded on reads. Photo writes replace the whole gallery and are not
//! atomic with the project write.

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, ProjectId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

use super::client::{check_rest, parse_json, transport_error, SupabaseClient};
use super::rows::{PhotoRow, ProjectRow};

const PROJECTS: &str = "projects";
const PHOTOS: &str = "photos";
const SELECT_WITH_PHOTOS: &str = "*,photos(*)";

#[derive(Debug, Clone)]
pub struct SupabaseProjectRepository {
    client: SupabaseClient,
}

impl SupabaseProjectRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn replace_photos(&self, project: &Project) -> Result<(), DomainError> {
        let response = self
            .client
            .rest_request(Method::DELETE, PHOTOS)
            .query(&[("project_id", format!("eq.{}", project.id()))])
            .send()
            .await
            .map_err(transport_error)?;
        check_rest(response).await?;
        self.insert_photos(project).await
    }

    async fn insert_photos(&self, project: &Project) -> Result<(), DomainError> {
        if project.photos().is_empty() {
            return Ok(());
        }
        let rows: Vec<PhotoRow> = project
            .photos()
            .iter()
            .enumerate()
            .map(|(position, photo)| PhotoRow::from_photo(photo, position))
            .collect();
        let response = self
            .client
            .rest_request(Method::POST, PHOTOS)
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await
            .map_err(transport_error)?;
        check_rest(response).await?;
        Ok(())
    }
}

fn not_found(id: &ProjectId) -> DomainError {
    DomainError::new(ErrorCode::ProjectNotFound, format!("Project {} not found", id))
}

#[async_trait]
impl ProjectRepository for SupabaseProjectRepository {
    async fn list_by_profile(
        &self,
        profile_id: &ProfileId,
        only_public: bool,
    ) -> Result<Vec<Project>, DomainError> {
        let mut query = vec![
            ("select", SELECT_WITH_PHOTOS.to_string()),
            ("user_id", format!("eq.{}", profile_id)),
            ("order", "date.desc".to_string()),
        ];
        if only_public {
            query.push(("is_public", "eq.true".to_string()));
        }
        let response = self
            .client
            .rest_request(Method::GET, PROJECTS)
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<ProjectRow> = parse_json(check_rest(response).await?).await?;

        rows.into_iter()
            .map(|row| row.into_project().map_err(DomainError::from))
            .collect()
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let response = self
            .client
            .rest_request(Method::GET, PROJECTS)
            .query(&[
                ("select", SELECT_WITH_PHOTOS.to_string()),
                ("id", format!("eq.{}", id)),
            ])
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<ProjectRow> = parse_json(check_rest(response).await?).await?;

        match rows.into_iter().next() {
            Some(row) => row.into_project().map(Some).map_err(DomainError::from),
            None => Ok(None),
        }
    }

    async fn create(&self, project: &Project) -> Result<(), DomainError> {
        let response = self
            .client
            .rest_request(Method::POST, PROJECTS)
            .header("Prefer", "return=minimal")
            .json(&ProjectRow::from_project(project))
            .send()
            .await
            .map_err(transport_error)?;
        check_rest(response).await?;
        self.insert_photos(project).await?;
        tracing::info!(project_id = %project.id(), owner = %project.owner(), "Project created");
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let response = self
            .client
            .rest_request(Method::PATCH, PROJECTS)
            .query(&[("id", format!("eq.{}", project.id()))])
            .header("Prefer", "return=representation")
            .json(&ProjectRow::from_project(project))
            .send()
            .await
            .map_err(transport_error)?;
        let updated: Vec<serde_json::Value> = parse_json(check_rest(response).await?).await?;
        if updated.is_empty() {
            return Err(not_found(&project.id()));
        }
        self.replace_photos(project).await
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let photos = self
            .client
            .rest_request(Method::DELETE, PHOTOS)
            .query(&[("project_id", format!("eq.{}", id))])
            .send()
            .await
            .map_err(transport_error)?;
        check_rest(photos).await?;

        let response = self
            .client
            .rest_request(Method::DELETE, PROJECTS)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(transport_error)?;
        let deleted: Vec<serde_json::Value> = parse_json(check_rest(response).await?).await?;
        if deleted.is_empty() {
            return Err(not_found(id));
        }
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }
}
