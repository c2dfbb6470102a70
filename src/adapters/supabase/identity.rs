//! Identity provider backed by the hosted auth service (GoTrue REST API).
//!
//! - `POST /auth/v1/token?grant_type=password` - sign in
//! - `POST /auth/v1/signup` - create account
//! - `POST /auth/v1/logout` - revoke session
//! - `GET  /auth/v1/user` - resolve a token to its account

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::broadcast;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::domain::session::{AccessToken, AuthEvent, AuthSession, Registration};
use crate::ports::{Credentials, IdentityProvider};

use super::client::SupabaseClient;

const EVENT_CAPACITY: usize = 32;

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
    #[serde(default)]
    user_metadata: GoTrueMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct GoTrueMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoTrueSession {
    access_token: String,
    #[serde(default)]
    expires_at: Option<i64>,
    user: GoTrueUser,
}

#[derive(Debug, Default, Deserialize)]
struct GoTrueErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

impl GoTrueErrorBody {
    fn text(&self) -> String {
        self.error_description
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_default()
    }
}

impl GoTrueUser {
    fn into_identity(self) -> Result<AuthenticatedUser, AuthError> {
        let id = UserId::new(self.id).map_err(|_| AuthError::InvalidToken)?;
        let email = self.email.unwrap_or_default();
        Ok(AuthenticatedUser::new(
            id,
            email,
            self.user_metadata.full_name,
            self.email_confirmed_at.is_some(),
        ))
    }
}

impl GoTrueSession {
    fn into_session(self) -> Result<AuthSession, AuthError> {
        Ok(AuthSession {
            identity: self.user.into_identity()?,
            access_token: AccessToken::new(self.access_token),
            expires_at: self.expires_at.map(Timestamp::from_unix_secs),
        })
    }
}

/// Identity provider talking to the hosted auth service.
pub struct SupabaseIdentityProvider {
    client: SupabaseClient,
    events: broadcast::Sender<AuthEvent>,
}

impl SupabaseIdentityProvider {
    pub fn new(client: SupabaseClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { client, events }
    }

    fn publish(&self, event: AuthEvent) {
        tracing::debug!(event_type = event.event_type(), "Publishing auth event");
        let _ = self.events.send(event);
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, AuthError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Identity service request failed: {}", e);
            AuthError::service_unavailable(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: GoTrueErrorBody = response.json().await.unwrap_or_default();
        Err(map_auth_error(status, &body))
    }
}

/// Maps identity-service failures to domain auth errors.
fn map_auth_error(status: StatusCode, body: &GoTrueErrorBody) -> AuthError {
    let text = body.text().to_lowercase();
    let code = body.error_code.as_deref().unwrap_or_default();

    if code == "user_already_exists" || text.contains("already registered") {
        return AuthError::EmailAlreadyRegistered;
    }
    if code == "invalid_credentials"
        || body.error.as_deref() == Some("invalid_grant")
        || text.contains("invalid login credentials")
    {
        return AuthError::InvalidCredentials;
    }

    match status.as_u16() {
        401 => {
            if text.contains("expired") {
                AuthError::TokenExpired
            } else {
                AuthError::InvalidToken
            }
        }
        403 => AuthError::InsufficientPermissions,
        404 => AuthError::UserNotFound,
        400 | 422 => AuthError::InvalidCredentials,
        _ => AuthError::service_unavailable(format!("status {}: {}", status, body.text())),
    }
}

async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    response.json().await.map_err(|e| {
        tracing::warn!("Unexpected identity service response: {}", e);
        AuthError::service_unavailable("unexpected identity service response")
    })
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        let request = self
            .client
            .auth_request(Method::POST, "token")
            .query(&[("grant_type", "password")])
            .json(&json!({
                "email": credentials.email,
                "password": credentials.password.expose_secret(),
            }));
        let session = parse::<GoTrueSession>(self.send(request).await?)
            .await?
            .into_session()?;

        tracing::info!(user_id = %session.identity.id, "User signed in");
        self.publish(AuthEvent::SignedIn {
            identity: session.identity.clone(),
            access_token: session.access_token.clone(),
        });
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Registration, AuthError> {
        let request = self.client.auth_request(Method::POST, "signup").json(&json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        }));
        let body: serde_json::Value = parse(self.send(request).await?).await?;

        // Auto-confirmed projects return a session; otherwise only the user.
        let registration = if body.get("access_token").is_some() {
            let session = serde_json::from_value::<GoTrueSession>(body)
                .map_err(|_| AuthError::service_unavailable("malformed sign-up session"))?
                .into_session()?;
            self.publish(AuthEvent::SignedIn {
                identity: session.identity.clone(),
                access_token: session.access_token.clone(),
            });
            Registration {
                identity: session.identity.clone(),
                session: Some(session),
            }
        } else {
            let identity = serde_json::from_value::<GoTrueUser>(body)
                .map_err(|_| AuthError::service_unavailable("malformed sign-up user"))?
                .into_identity()?;
            Registration {
                identity,
                session: None,
            }
        };

        tracing::info!(
            user_id = %registration.identity.id,
            confirmed = registration.session.is_some(),
            "Account created"
        );
        Ok(registration)
    }

    async fn sign_out(&self, access_token: &AccessToken) -> Result<(), AuthError> {
        // GoTrue's logout response is empty, so resolve the account first
        let identity = self.current_identity(access_token).await?;
        let request = self
            .client
            .auth_request(Method::POST, "logout")
            .bearer_auth(access_token.expose());
        self.send(request).await?;
        tracing::info!(user_id = %identity.id, "User signed out");
        self.publish(AuthEvent::SignedOut {
            user_id: identity.id,
        });
        Ok(())
    }

    async fn current_identity(
        &self,
        access_token: &AccessToken,
    ) -> Result<AuthenticatedUser, AuthError> {
        let request = self
            .client
            .auth_request(Method::GET, "user")
            .bearer_auth(access_token.expose());
        parse::<GoTrueUser>(self.send(request).await?)
            .await?
            .into_identity()
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
