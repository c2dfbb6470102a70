//! Axum router for project endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{create_project, delete_project, get_project, update_project};

/// Project routes, mounted at `/api/projects`.
///
/// - `POST /` - Create a project (auth required)
/// - `GET /:id` - Project page (private projects: owner only)
/// - `PATCH /:id` - Update an owned project
/// - `DELETE /:id` - Delete an owned project
pub fn project_routes() -> Router<AppState> {
    Router::new().route("/", post(create_project)).route(
        "/:id",
        get(get_project).patch(update_project).delete(delete_project),
    )
}
