//! HS256 JWT adapter for access-token validation.
//!
//! The identity service signs access tokens with a shared project secret.
//! This adapter implements the `SessionValidator` port by:
//!
//! 1. Verifying the HS256 signature with the configured secret
//! 2. Validating audience, expiry and (optionally) issuer claims
//! 3. Mapping claims to the domain `AuthenticatedUser` type
//!
//! Validation is local; no network round-trip per request.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Audience the identity service puts on signed-in user tokens.
pub const DEFAULT_AUDIENCE: &str = "authenticated";

/// Configuration for the JWT validator.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 signing secret.
    secret: Secret<String>,

    /// Expected audience claim.
    pub audience: String,

    /// Expected issuer, if the deployment pins one.
    pub issuer: Option<String>,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            audience: DEFAULT_AUDIENCE.to_string(),
            issuer: None,
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }
}

/// JWT claims issued by the identity service.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AccessClaims {
    /// Subject - the user ID
    pub sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,

    #[serde(default)]
    pub aud: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Set once the user confirmed their email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_confirmed_at: Option<String>,

    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form metadata stored with the account at sign-up.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Validates HS256-signed access tokens.
pub struct JwtSessionValidator {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        if let Some(issuer) = &self.config.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        validation
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Invalid audience in token");
                        AuthError::InvalidToken
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;
        let claims = token_data.claims;

        let email = claims.email.filter(|e| !e.is_empty()).ok_or_else(|| {
            tracing::warn!("Token missing email claim");
            AuthError::InvalidToken
        })?;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            user_id,
            email,
            claims.user_metadata.full_name,
            claims.email_confirmed_at.is_some(),
        ))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("audience", &self.config.audience)
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";

    fn claims(exp: i64) -> AccessClaims {
        AccessClaims {
            sub: "3f6c1f0e-user".to_string(),
            exp,
            aud: Some(DEFAULT_AUDIENCE.to_string()),
            iss: None,
            email: Some("pro@example.com".to_string()),
            email_confirmed_at: Some("2024-01-01T00:00:00Z".to_string()),
            user_metadata: UserMetadata {
                full_name: Some("Pat Pro".to_string()),
            },
        }
    }

    fn sign(claims: &AccessClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future() -> i64 {
        Timestamp::now().add_days(1).as_unix_secs()
    }

    fn validator() -> JwtSessionValidator {
        JwtSessionValidator::new(JwtConfig::new(SECRET))
    }

    #[tokio::test]
    async fn valid_token_maps_claims_to_user() {
        let token = sign(&claims(future()), SECRET);

        let user = validator().validate(&token).await.unwrap();

        assert_eq!(user.id.as_str(), "3f6c1f0e-user");
        assert_eq!(user.email, "pro@example.com");
        assert_eq!(user.display_name.as_deref(), Some("Pat Pro"));
        assert!(user.email_verified);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let past = Timestamp::now().add_days(-1).as_unix_secs();
        let token = sign(&claims(past), SECRET);

        let result = validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let token = sign(&claims(future()), "a-completely-different-secret-value!!");

        let result = validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn wrong_audience_is_rejected() {
        let mut c = claims(future());
        c.aud = Some("anon".to_string());
        let token = sign(&c, SECRET);

        let result = validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn pinned_issuer_must_match() {
        let validator =
            JwtSessionValidator::new(JwtConfig::new(SECRET).with_issuer("https://auth.example.com"));
        let mut c = claims(future());
        c.iss = Some("https://other.example.com".to_string());
        let token = sign(&c, SECRET);

        assert!(matches!(
            validator.validate(&token).await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn token_without_email_is_rejected() {
        let mut c = claims(future());
        c.email = None;
        let token = sign(&c, SECRET);

        let result = validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let result = validator().validate("not.a.jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let debug = format!("{:?}", validator());
        assert!(!debug.contains(SECRET));
    }

    #[test]
    fn jwt_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtSessionValidator>();
    }
}
