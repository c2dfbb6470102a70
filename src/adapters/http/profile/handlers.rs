//! HTTP handlers for profile endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::adapters::http::projects::dto::ProjectCardResponse;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetOwnProfileQuery, GetPublicProfileQuery, UpdateProfileCommand};
use crate::domain::foundation::DomainError;
use crate::domain::profile::{ProfileError, ProfileUpdate};

use super::dto::{ProfilePageResponse, ProfileResponse};

/// GET /api/users/:slug - Public profile page
///
/// Owners viewing their own page also get their private projects.
pub async fn get_public_profile(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ProfileApiError> {
    let query = GetPublicProfileQuery {
        slug,
        viewer: user.map(|u| u.id),
    };

    let view = state.public_profile_handler().handle(query).await?;

    Ok(Json(ProfilePageResponse {
        profile: ProfileResponse::from(&view.profile),
        projects: view.projects.iter().map(ProjectCardResponse::from).collect(),
        is_owner: view.is_owner,
    }))
}

/// GET /api/profile - The caller's own profile and every project
pub async fn get_own_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ProfileApiError> {
    let view = state
        .own_profile_handler()
        .handle(GetOwnProfileQuery { user_id: user.id })
        .await?;

    Ok(Json(ProfilePageResponse {
        profile: ProfileResponse::from(&view.profile),
        projects: view.projects.iter().map(ProjectCardResponse::from).collect(),
        is_owner: true,
    }))
}

/// PATCH /api/profile - Update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(update): Json<ProfileUpdate>,
) -> Result<impl IntoResponse, ProfileApiError> {
    let cmd = UpdateProfileCommand {
        user_id: user.id,
        update,
    };

    let profile = state.update_profile_handler().handle(cmd).await?;

    Ok(Json(ProfileResponse::from(&profile)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts profile errors to HTTP responses.
#[derive(Debug)]
pub struct ProfileApiError(pub ProfileError);

impl From<ProfileError> for ProfileApiError {
    fn from(err: ProfileError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for ProfileApiError {
    fn from(err: DomainError) -> Self {
        Self(ProfileError::from(err))
    }
}

impl IntoResponse for ProfileApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ProfileError::NotFound(_) => StatusCode::NOT_FOUND,
            ProfileError::Forbidden => StatusCode::FORBIDDEN,
            ProfileError::AlreadyExists => StatusCode::CONFLICT,
            ProfileError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ProfileError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Profile request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let code = self.0.code().to_string();
        let body = match &self.0 {
            ProfileError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                code,
                self.0.message(),
                serde_json::json!({ "field": field }),
            ),
            _ => ErrorResponse::new(code, self.0.message()),
        };
        body.into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_statuses() {
        let status = |e: ProfileError| ProfileApiError(e).into_response().status();
        assert_eq!(status(ProfileError::not_found("ghost")), StatusCode::NOT_FOUND);
        assert_eq!(status(ProfileError::forbidden()), StatusCode::FORBIDDEN);
        assert_eq!(status(ProfileError::AlreadyExists), StatusCode::CONFLICT);
        assert_eq!(
            status(ProfileError::validation("bio", "too long")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(ProfileError::infrastructure("down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
