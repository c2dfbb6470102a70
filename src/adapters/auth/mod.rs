//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `IdentityProvider` ports:
//!
//! - `jwt` - HS256 access-token validation for the hosted identity service
//! - `in_memory` - In-process accounts for the `memory` backend
//! - `mock` - Fixed token table for tests

mod in_memory;
mod jwt;
mod mock;

pub use in_memory::InMemoryIdentityProvider;
pub use jwt::{JwtConfig, JwtSessionValidator, DEFAULT_AUDIENCE};
pub use mock::MockSessionValidator;
