//! Project command and query handlers.

mod create_project;
mod delete_project;
mod get_project;
mod update_project;

pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use delete_project::{DeleteProjectCommand, DeleteProjectHandler};
pub use get_project::{GetProjectHandler, GetProjectQuery, ProjectView};
pub use update_project::{UpdateProjectCommand, UpdateProjectHandler};
