//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Each handler owns the ports it needs as `Arc<dyn Port>`.

pub mod account;
pub mod directory;
pub mod profile;
pub mod project;

pub use account::{
    AccountError, CurrentUserView, GetCurrentUserHandler, GetCurrentUserQuery, LoginCommand,
    LoginHandler, LoginResult, LogoutCommand, LogoutHandler, RegisterCommand, RegisterHandler,
    RegisterResult, GENERIC_AUTH_FAILURE,
};
pub use directory::{
    GetDirectoryFacetsHandler, GetDirectoryFacetsQuery, SearchDirectoryHandler,
    SearchDirectoryQuery, SearchDirectoryResult,
};
pub use profile::{
    GetOwnProfileHandler, GetOwnProfileQuery, GetPublicProfileHandler, GetPublicProfileQuery,
    OwnProfileView, PublicProfileView, UpdateProfileCommand, UpdateProfileHandler,
};
pub use project::{
    CreateProjectCommand, CreateProjectHandler, DeleteProjectCommand, DeleteProjectHandler,
    GetProjectHandler, GetProjectQuery, ProjectView, UpdateProjectCommand, UpdateProjectHandler,
};
