//! Profile module - a service professional's public listing.
//!
//! - [`Profile`] aggregate with registration and partial updates
//! - [`ContactInfo`] sub-record
//! - [`Industry`] fixed category set

mod aggregate;
mod contact;
mod errors;
mod industry;

pub use aggregate::{NewProfile, Profile, ProfileUpdate, MAX_BIO_LENGTH, MAX_NAME_LENGTH};
pub use contact::{validate_email, ContactInfo};
pub use errors::ProfileError;
pub use industry::Industry;
