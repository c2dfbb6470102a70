//! HTTP adapter for the professional directory.

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::directory_routes;
