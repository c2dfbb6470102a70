//! Shared application state for the API routers.

use std::sync::Arc;

use crate::application::handlers::{
    CreateProjectHandler, DeleteProjectHandler, GetCurrentUserHandler, GetDirectoryFacetsHandler,
    GetOwnProfileHandler, GetProjectHandler, GetPublicProfileHandler, LoginHandler,
    LogoutHandler, RegisterHandler, SearchDirectoryHandler, UpdateProfileHandler,
    UpdateProjectHandler,
};
use crate::ports::{IdentityProvider, ProfileRepository, ProjectRepository, SessionValidator};

/// Dependencies shared by every request.
///
/// Cloned per request; all fields are `Arc`s. Handlers are built on demand
/// from the ports they need.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub identity: Arc<dyn IdentityProvider>,
    pub validator: Arc<dyn SessionValidator>,
}

impl AppState {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        projects: Arc<dyn ProjectRepository>,
        identity: Arc<dyn IdentityProvider>,
        validator: Arc<dyn SessionValidator>,
    ) -> Self {
        Self {
            profiles,
            projects,
            identity,
            validator,
        }
    }

    // Directory

    pub fn search_directory_handler(&self) -> SearchDirectoryHandler {
        SearchDirectoryHandler::new(self.profiles.clone())
    }

    pub fn directory_facets_handler(&self) -> GetDirectoryFacetsHandler {
        GetDirectoryFacetsHandler::new(self.profiles.clone())
    }

    // Profiles

    pub fn public_profile_handler(&self) -> GetPublicProfileHandler {
        GetPublicProfileHandler::new(self.profiles.clone(), self.projects.clone())
    }

    pub fn own_profile_handler(&self) -> GetOwnProfileHandler {
        GetOwnProfileHandler::new(self.profiles.clone(), self.projects.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.profiles.clone())
    }

    // Projects

    pub fn create_project_handler(&self) -> CreateProjectHandler {
        CreateProjectHandler::new(self.profiles.clone(), self.projects.clone())
    }

    pub fn get_project_handler(&self) -> GetProjectHandler {
        GetProjectHandler::new(self.profiles.clone(), self.projects.clone())
    }

    pub fn update_project_handler(&self) -> UpdateProjectHandler {
        UpdateProjectHandler::new(self.projects.clone())
    }

    pub fn delete_project_handler(&self) -> DeleteProjectHandler {
        DeleteProjectHandler::new(self.projects.clone())
    }

    // Accounts

    pub fn register_handler(&self) -> RegisterHandler {
        RegisterHandler::new(self.identity.clone(), self.profiles.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.identity.clone(), self.profiles.clone())
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.identity.clone())
    }

    pub fn current_user_handler(&self) -> GetCurrentUserHandler {
        GetCurrentUserHandler::new(self.profiles.clone())
    }
}
