//! Account handlers - registration, sign-in, sign-out and "who am I".

mod errors;
mod get_current_user;
mod login;
mod logout;
mod register;

pub use errors::{AccountError, GENERIC_AUTH_FAILURE};
pub use get_current_user::{CurrentUserView, GetCurrentUserHandler, GetCurrentUserQuery};
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::{LogoutCommand, LogoutHandler};
pub use register::{RegisterCommand, RegisterHandler, RegisterResult, MAX_SLUG_ATTEMPTS};
