//! Data and identity backend selection.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::supabase::SupabaseConfig;

/// Which adapters back the ports.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    /// In-process stores, optionally seeded from YAML
    #[default]
    Memory,
    /// Hosted auth + PostgREST
    Supabase,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub provider: BackendProvider,

    pub supabase_url: Option<String>,

    pub supabase_anon_key: Option<Secret<String>>,

    /// Service-role key for server-side data access
    pub supabase_service_key: Option<Secret<String>>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Client settings for the hosted backend, if URL and anon key are set.
    pub fn supabase_config(&self) -> Option<SupabaseConfig> {
        let url = self.supabase_url.as_ref()?;
        let anon_key = self.supabase_anon_key.as_ref()?;
        let config = SupabaseConfig::new(url.clone(), anon_key.expose_secret().clone())
            .with_timeout(self.timeout());
        Some(match &self.supabase_service_key {
            Some(key) => config.with_service_key(key.expose_secret().clone()),
            None => config,
        })
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.provider == BackendProvider::Memory {
            return Ok(());
        }

        let url = self
            .supabase_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingRequired("BACKEND__SUPABASE_URL"))?;
        if self
            .supabase_anon_key
            .as_ref()
            .map_or(true, |k| k.expose_secret().is_empty())
        {
            return Err(ValidationError::MissingRequired("BACKEND__SUPABASE_ANON_KEY"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::BackendMustBeHttps);
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: BackendProvider::default(),
            supabase_url: None,
            supabase_anon_key: None,
            supabase_service_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supabase(url: &str) -> BackendConfig {
        BackendConfig {
            provider: BackendProvider::Supabase,
            supabase_url: Some(url.to_string()),
            supabase_anon_key: Some(Secret::new("anon".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_memory_needs_nothing() {
        assert!(BackendConfig::default().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_supabase_requires_url_and_key() {
        let config = BackendConfig {
            provider: BackendProvider::Supabase,
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("BACKEND__SUPABASE_URL"))
        );

        let mut config = supabase("https://abc.supabase.co");
        config.supabase_anon_key = None;
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("BACKEND__SUPABASE_ANON_KEY"))
        );
    }

    #[test]
    fn test_production_requires_https() {
        let config = supabase("http://localhost:54321");
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::BackendMustBeHttps)
        );
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        assert_eq!(
            supabase("abc.supabase.co").validate(&Environment::Development),
            Err(ValidationError::InvalidBackendUrl)
        );
    }

    #[test]
    fn test_supabase_config_built_when_complete() {
        let config = supabase("https://abc.supabase.co").supabase_config().unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(BackendConfig::default().supabase_config().is_none());
    }
}
