//! Request and response types for the auth endpoints.

use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::adapters::http::profile::dto::ProfileResponse;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::profile::{NewProfile, Profile};
use crate::domain::session::AuthSession;
use crate::ports::Credentials;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: Secret<String>,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl RegisterRequest {
    pub fn into_parts(self) -> (Credentials, NewProfile) {
        (
            Credentials {
                email: self.email,
                password: self.password,
            },
            NewProfile {
                username: self.username,
                full_name: self.full_name,
                company_name: self.company_name,
            },
        )
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityResponse {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

impl From<&AuthenticatedUser> for IdentityResponse {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            email_verified: user.email_verified,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: Option<String>,
}

impl From<&AuthSession> for SessionResponse {
    fn from(session: &AuthSession) -> Self {
        Self {
            access_token: session.access_token.expose().to_string(),
            token_type: "bearer",
            expires_at: session.expires_at.as_ref().map(|t| t.to_rfc3339()),
        }
    }
}

/// Who is signed in, with what session and which profile.
///
/// `session` is absent from `/auth/me` and from registrations that still
/// await email confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: IdentityResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionResponse>,
    pub profile: Option<ProfileResponse>,
}

impl AuthResponse {
    pub fn new(
        user: &AuthenticatedUser,
        session: Option<&AuthSession>,
        profile: Option<&Profile>,
    ) -> Self {
        Self {
            user: IdentityResponse::from(user),
            session: session.map(SessionResponse::from),
            profile: profile.map(ProfileResponse::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn register_request_splits_into_credentials_and_profile() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"ana@example.com","password":"pw-123456","username":"ana","full_name":"Ana"}"#,
        )
        .unwrap();

        let (credentials, profile) = request.into_parts();

        assert_eq!(credentials.password.expose_secret(), "pw-123456");
        assert_eq!(profile.username, "ana");
        assert!(profile.company_name.is_none());
    }
}
