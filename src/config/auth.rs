//! Access-token validation settings for the hosted identity service.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::auth::{JwtConfig, DEFAULT_AUDIENCE};

/// Shortest HS256 secret accepted.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// JWT settings. Only consulted by the `supabase` backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret of the identity service
    pub jwt_secret: Option<Secret<String>>,

    #[serde(default = "default_audience")]
    pub audience: String,

    pub issuer: Option<String>,
}

impl AuthConfig {
    /// Validator settings, if a secret is configured.
    pub fn jwt_config(&self) -> Option<JwtConfig> {
        let secret = self.jwt_secret.as_ref()?;
        let config = JwtConfig::new(secret.expose_secret().clone()).with_audience(&self.audience);
        Some(match &self.issuer {
            Some(issuer) => config.with_issuer(issuer),
            None => config,
        })
    }

    /// Checks the secret when token validation is required.
    pub fn validate(&self, required: bool) -> Result<(), ValidationError> {
        match &self.jwt_secret {
            None if required => Err(ValidationError::MissingRequired("AUTH__JWT_SECRET")),
            Some(secret) if secret.expose_secret().len() < MIN_JWT_SECRET_LENGTH => {
                Err(ValidationError::JwtSecretTooShort(MIN_JWT_SECRET_LENGTH))
            }
            _ => Ok(()),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            audience: default_audience(),
            issuer: None,
        }
    }
}

fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}
