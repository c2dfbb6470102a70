//! Profile command and query handlers.

mod get_own_profile;
mod get_public_profile;
mod update_profile;

pub use get_own_profile::{GetOwnProfileHandler, GetOwnProfileQuery, OwnProfileView};
pub use get_public_profile::{GetPublicProfileHandler, GetPublicProfileQuery, PublicProfileView};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
