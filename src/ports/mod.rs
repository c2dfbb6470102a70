//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `ProfileRepository` - Directory profiles
//! - `ProjectRepository` - Portfolio projects and their photos
//!
//! ## Identity Ports
//!
//! - `IdentityProvider` - Sign-in, sign-up, sign-out, and auth events
//! - `SessionValidator` - Bearer-token validation for HTTP requests

mod identity_provider;
mod profile_repository;
mod project_repository;
mod session_validator;

pub use identity_provider::{Credentials, IdentityProvider};
pub use profile_repository::ProfileRepository;
pub use project_repository::ProjectRepository;
pub use session_validator::SessionValidator;
