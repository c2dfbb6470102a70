//! Axum router for the auth endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{login, logout, me, register};

/// Auth routes, mounted at `/api/auth`.
///
/// - `POST /register` - Sign up and create a profile
/// - `POST /login` - Sign in
/// - `POST /logout` - Sign out (auth required)
/// - `GET /me` - Current user (auth required)
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}
