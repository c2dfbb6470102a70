//! Directory module - searching and ordering the professional directory.
//!
//! Everything here is pure: no I/O, no shared state, no errors.

mod collation;
mod engine;
mod facets;
mod filter;

pub use collation::locale_cmp;
pub use engine::{matches, search};
pub use facets::DirectoryFacets;
pub use filter::{FilterSpec, SortMode};
