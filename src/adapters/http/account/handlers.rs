//! HTTP handlers for sign-up, sign-in, sign-out and the current user.

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::{bearer_token, RequireAuth};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    AccountError, GetCurrentUserQuery, LoginCommand, LogoutCommand, RegisterCommand,
};
use crate::domain::session::AccessToken;

use super::dto::{AuthResponse, LoginRequest, RegisterRequest};

/// POST /api/auth/register - Create an account and its profile
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let (credentials, profile) = request.into_parts();

    let result = state
        .register_handler()
        .handle(RegisterCommand {
            credentials,
            profile,
        })
        .await?;

    let response = AuthResponse::new(
        &result.identity,
        result.session.as_ref(),
        Some(&result.profile),
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - Password sign-in
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let result = state
        .login_handler()
        .handle(LoginCommand {
            credentials: request.into(),
        })
        .await?;

    Ok(Json(AuthResponse::new(
        &result.session.identity,
        Some(&result.session),
        result.profile.as_ref(),
    )))
}

/// POST /api/auth/logout - Revoke the bearer token
pub async fn logout(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AccountApiError> {
    let token = bearer_token(&headers).ok_or(AccountError::Unauthenticated)?;

    state
        .logout_handler()
        .handle(LogoutCommand {
            access_token: AccessToken::new(token),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me - Current identity and profile
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AccountApiError> {
    let view = state
        .current_user_handler()
        .handle(GetCurrentUserQuery { identity: user })
        .await?;

    Ok(Json(AuthResponse::new(
        &view.identity,
        None,
        view.profile.as_ref(),
    )))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for account flows.
///
/// Bodies use [`AccountError::public_message`], so credential and
/// availability failures all read the same to the client.
#[derive(Debug)]
pub struct AccountApiError(pub AccountError);

impl From<AccountError> for AccountApiError {
    fn from(err: AccountError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AccountError::InvalidCredentials | AccountError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            AccountError::EmailAlreadyRegistered | AccountError::SlugUnavailable(_) => {
                StatusCode::CONFLICT
            }
            AccountError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            AccountError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Identity service unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
            AccountError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Account request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let code = self.0.code().to_string();
        let body = match &self.0 {
            AccountError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                code,
                self.0.public_message(),
                serde_json::json!({ "field": field }),
            ),
            _ => ErrorResponse::new(code, self.0.public_message()),
        };
        body.into_response_with(status)
    }
}
