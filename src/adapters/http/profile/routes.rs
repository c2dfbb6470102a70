//! Axum routers for profile endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{get_own_profile, get_public_profile, update_profile};

/// Public profile pages, mounted at `/api/users`.
///
/// - `GET /:slug` - Profile and its visible projects
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/:slug", get(get_public_profile))
}

/// The caller's own profile, mounted at `/api/profile`.
///
/// - `GET /` - Own profile with all projects
/// - `PATCH /` - Partial update
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_own_profile).patch(update_profile))
}
