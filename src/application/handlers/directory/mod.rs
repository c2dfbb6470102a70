//! Directory query handlers.

mod get_facets;
mod search_directory;

pub use get_facets::{GetDirectoryFacetsHandler, GetDirectoryFacetsQuery};
pub use search_directory::{SearchDirectoryHandler, SearchDirectoryQuery, SearchDirectoryResult};
