//! Adapters - implementations of the ports and the HTTP surface.
//!
//! - `auth` - Session validation and the in-process identity provider
//! - `memory` - In-memory stores and YAML seed loading
//! - `supabase` - Hosted identity and PostgREST data adapters
//! - `http` - axum routes, DTOs, and auth middleware

pub mod auth;
pub mod http;
pub mod memory;
pub mod supabase;
