//! HTTP handlers for project endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::adapters::http::profile::dto::ProfileCardResponse;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateProjectCommand, DeleteProjectCommand, GetProjectQuery, UpdateProjectCommand,
};
use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::project::{NewProject, ProjectError};

use super::dto::{ProjectPageResponse, ProjectResponse, UpdateProjectRequest};

/// POST /api/projects - Create a project for the caller's profile
pub async fn create_project(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<NewProject>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let cmd = CreateProjectCommand {
        user_id: user.id,
        project: request,
    };

    let project = state.create_project_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

/// GET /api/projects/:id - Project page; private projects only for the owner
pub async fn get_project(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let query = GetProjectQuery {
        project_id: parse_project_id(&id)?,
        viewer: user.map(|u| u.id),
    };

    let view = state.get_project_handler().handle(query).await?;

    Ok(Json(ProjectPageResponse {
        project: ProjectResponse::from(&view.project),
        owner: view.owner.as_ref().map(ProfileCardResponse::from),
        is_owner: view.is_owner,
    }))
}

/// PATCH /api/projects/:id - Update an owned project
pub async fn update_project(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let cmd = UpdateProjectCommand {
        user_id: user.id,
        project_id: parse_project_id(&id)?,
        update: request.update,
        add_photos: request.add_photos,
        remove_photos: request.remove_photos,
    };

    let project = state.update_project_handler().handle(cmd).await?;

    Ok(Json(ProjectResponse::from(&project)))
}

/// DELETE /api/projects/:id - Delete an owned project
pub async fn delete_project(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let cmd = DeleteProjectCommand {
        user_id: user.id,
        project_id: parse_project_id(&id)?,
    };

    state.delete_project_handler().handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_project_id(raw: &str) -> Result<ProjectId, ProjectApiError> {
    raw.parse::<ProjectId>().map_err(|_| {
        ProjectApiError(ProjectError::ValidationFailed {
            field: "id".to_string(),
            message: format!("'{}' is not a project id", raw),
        })
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts project errors to HTTP responses.
#[derive(Debug)]
pub struct ProjectApiError(pub ProjectError);

impl From<ProjectError> for ProjectApiError {
    fn from(err: ProjectError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for ProjectApiError {
    fn from(err: DomainError) -> Self {
        Self(ProjectError::from(err))
    }
}

impl IntoResponse for ProjectApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ProjectError::NotFound(_) => StatusCode::NOT_FOUND,
            ProjectError::Forbidden => StatusCode::FORBIDDEN,
            ProjectError::NoProfile => StatusCode::CONFLICT,
            ProjectError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ProjectError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Project request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let code = self.0.code().to_string();
        let body = match &self.0 {
            ProjectError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                code,
                self.0.message(),
                serde_json::json!({ "field": field }),
            ),
            _ => ErrorResponse::new(code, self.0.message()),
        };
        body.into_response_with(status)
    }
}
