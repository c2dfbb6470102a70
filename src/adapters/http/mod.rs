//! HTTP adapters - the JSON API.
//!
//! Each area has its own `dto`, `handlers` and `routes`; `router` mounts
//! them under `/api` behind the auth middleware.

pub mod account;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod profile;
pub mod projects;
mod router;
mod state;

pub use error::ErrorResponse;
pub use router::{api_routes, app_router, RouterConfig};
pub use state::AppState;
