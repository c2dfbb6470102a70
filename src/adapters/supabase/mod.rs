//! Adapters for the hosted backend-as-a-service.
//!
//! - `SupabaseIdentityProvider` - accounts and sessions (GoTrue)
//! - `SupabaseProfileRepository` / `SupabaseProjectRepository` - data (PostgREST)
//!
//! All three share one [`SupabaseClient`].

mod client;
mod identity;
mod profiles;
mod projects;
mod rows;

pub use client::{SupabaseClient, SupabaseConfig};
pub use identity::SupabaseIdentityProvider;
pub use profiles::SupabaseProfileRepository;
pub use projects::SupabaseProjectRepository;
