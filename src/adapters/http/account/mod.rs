//! HTTP adapter for account flows.

pub mod dto;
pub mod handlers;
mod routes;

pub use handlers::AccountApiError;
pub use routes::account_routes;
