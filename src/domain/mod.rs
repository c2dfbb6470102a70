//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, auth types)
//! - `profile` - Professional profiles and contact details
//! - `project` - Portfolio projects, photos, and the gallery cursor
//! - `directory` - Directory search engine, filter spec, and facets
//! - `session` - Client session state and identity-provider events

pub mod directory;
pub mod foundation;
pub mod profile;
pub mod project;
pub mod session;
