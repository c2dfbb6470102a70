//! Project module - portfolio entries and their photo galleries.

mod aggregate;
mod errors;
mod gallery;
mod photo;

pub use aggregate::{NewProject, Project, ProjectUpdate, MAX_TITLE_LENGTH};
pub use errors::ProjectError;
pub use gallery::Gallery;
pub use photo::{NewPhoto, Photo};
