//! Top-level router: `/health` plus every API module under `/api`.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::{middleware, routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::account::account_routes;
use super::directory::directory_routes;
use super::middleware::auth_middleware;
use super::profile::{profile_routes, user_routes};
use super::projects::project_routes;
use super::state::AppState;

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub request_timeout: Duration,
    /// Allowed browser origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Assembles the full application router.
pub fn app_router(state: AppState, config: &RouterConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes(state))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Every `/api` module behind the bearer-token middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/directory", directory_routes())
        .nest("/users", user_routes())
        .nest("/profile", profile_routes())
        .nest("/projects", project_routes())
        .nest("/auth", account_routes())
        .layer(middleware::from_fn_with_state(
            state.validator.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}
