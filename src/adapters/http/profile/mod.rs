//! HTTP adapter for profiles.

pub mod dto;
pub mod handlers;
mod routes;

pub use handlers::ProfileApiError;
pub use routes::{profile_routes, user_routes};
