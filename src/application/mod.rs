//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! [`SessionContext`] tracks one client's signed-in state on top of them.

pub mod handlers;
mod session_context;

pub use handlers::*;
pub use session_context::{SessionContext, SessionListener};
