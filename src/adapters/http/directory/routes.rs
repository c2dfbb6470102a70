//! Axum router for directory endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{get_facets, search_directory};

/// Directory routes, mounted at `/api/directory`.
///
/// - `GET /` - Search (`q`, `industry`, `location`, `specialty`, `sort_by`)
/// - `GET /facets` - Filter option lists
pub fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search_directory))
        .route("/facets", get(get_facets))
}
