//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `SHOWCASE` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use showcase::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod backend;
mod directory;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_JWT_SECRET_LENGTH};
pub use backend::{BackendConfig, BackendProvider};
pub use directory::DirectoryConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Host, port, environment, logging, CORS
    #[serde(default)]
    pub server: ServerConfig,

    /// Access-token validation
    #[serde(default)]
    pub auth: AuthConfig,

    /// Which adapters back the ports
    #[serde(default)]
    pub backend: BackendConfig,

    /// Seed data for the in-memory backend
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads variables with the `SHOWCASE` prefix
    /// 3. Splits nested keys on `__`
    ///
    /// - `SHOWCASE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SHOWCASE__BACKEND__PROVIDER=supabase` -> `backend.provider`
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` if a value cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SHOWCASE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic checks across all sections.
    ///
    /// The JWT secret is only required when the hosted backend issues the
    /// tokens; the in-memory backend validates its own opaque tokens.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate(&self.server.environment)?;
        self.auth
            .validate(self.backend.provider == BackendProvider::Supabase)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "SHOWCASE__SERVER__PORT",
        "SHOWCASE__SERVER__ENVIRONMENT",
        "SHOWCASE__BACKEND__PROVIDER",
        "SHOWCASE__BACKEND__SUPABASE_URL",
        "SHOWCASE__BACKEND__SUPABASE_ANON_KEY",
        "SHOWCASE__AUTH__JWT_SECRET",
        "SHOWCASE__DIRECTORY__SEED_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_defaults_use_memory_backend() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.backend.provider, BackendProvider::Memory);
        assert!(config.directory.seed_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port_and_seed() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("SHOWCASE__SERVER__PORT", "3000"),
            ("SHOWCASE__DIRECTORY__SEED_PATH", "seed/directory.yaml"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.directory.seed_path.as_deref(),
            Some(std::path::Path::new("seed/directory.yaml"))
        );
    }

    #[test]
    fn test_supabase_requires_jwt_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("SHOWCASE__BACKEND__PROVIDER", "supabase"),
            ("SHOWCASE__BACKEND__SUPABASE_URL", "https://abc.supabase.co"),
            ("SHOWCASE__BACKEND__SUPABASE_ANON_KEY", "anon-key"),
        ])
        .unwrap();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_full_supabase_config_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("SHOWCASE__SERVER__ENVIRONMENT", "production"),
            ("SHOWCASE__BACKEND__PROVIDER", "supabase"),
            ("SHOWCASE__BACKEND__SUPABASE_URL", "https://abc.supabase.co"),
            ("SHOWCASE__BACKEND__SUPABASE_ANON_KEY", "anon-key"),
            ("SHOWCASE__AUTH__JWT_SECRET", "0123456789abcdef0123456789abcdef"),
        ])
        .unwrap();

        assert!(config.is_production());
        assert!(config.validate().is_ok());
        assert!(config.auth.jwt_config().is_some());
    }

    #[test]
    fn test_unknown_provider_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = load_with(&[("SHOWCASE__BACKEND__PROVIDER", "firebase")]);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
