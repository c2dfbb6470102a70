//! HTTP adapter for portfolio projects.

pub mod dto;
pub mod handlers;
mod routes;

pub use handlers::ProjectApiError;
pub use routes::project_routes;
