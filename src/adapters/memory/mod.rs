//! In-memory adapters for the `memory` backend and tests.

mod profile_store;
mod project_store;
mod seed;

pub use profile_store::InMemoryProfileRepository;
pub use project_store::InMemoryProjectRepository;
pub use seed::{load_seed, parse_seed, DirectorySeed, SeedAccount, SeedError};

use crate::domain::foundation::{DomainError, ErrorCode};

fn lock_poisoned<T>(_: std::sync::PoisonError<T>) -> DomainError {
    DomainError::new(ErrorCode::InternalError, "In-memory store lock poisoned")
}
