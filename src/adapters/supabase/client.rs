//! Shared HTTP client for the hosted backend (GoTrue auth + PostgREST data).

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Configuration for the hosted backend.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g., "https://abc123.supabase.co").
    pub url: String,
    /// Public anon key, sent as `apikey` on every request.
    anon_key: Secret<String>,
    /// Service-role key for server-side data access. Falls back to the anon key.
    service_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: Secret::new(anon_key.into()),
            service_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(Secret::new(key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn anon_key(&self) -> &str {
        self.anon_key.expose_secret()
    }

    fn data_key(&self) -> &str {
        self.service_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_else(|| self.anon_key())
    }

    fn base(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Cheaply cloneable handle shared by the backend adapters.
#[derive(Clone)]
pub struct SupabaseClient {
    config: Arc<SupabaseConfig>,
    http: Client,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::backend(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base(), path)
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base(), table)
    }

    /// Request against the identity service, authenticated with the anon key.
    pub(crate) fn auth_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.auth_url(path))
            .header("apikey", self.config.anon_key())
    }

    /// Request against the data API.
    pub(crate) fn rest_request(&self, method: Method, table: &str) -> RequestBuilder {
        let key = self.config.data_key();
        self.http
            .request(method, self.rest_url(table))
            .header("apikey", key)
            .bearer_auth(key)
    }
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("url", &self.config.url)
            .finish_non_exhaustive()
    }
}

/// Error body returned by the data API.
#[derive(Debug, Default, Deserialize)]
struct RestErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

pub(crate) fn transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::backend("Backend request timed out")
    } else if e.is_connect() {
        DomainError::backend(format!("Connection failed: {}", e))
    } else {
        DomainError::backend(e.to_string())
    }
}

/// Passes successful responses through and maps failures to domain errors.
pub(crate) async fn check_rest(response: Response) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: RestErrorBody = serde_json::from_str(&text).unwrap_or_default();
    Err(rest_error(status, body, &text))
}

fn rest_error(status: StatusCode, body: RestErrorBody, raw: &str) -> DomainError {
    let message = body.message.clone().unwrap_or_else(|| raw.to_string());
    let unique_violation = body.code.as_deref() == Some("23505") || status == StatusCode::CONFLICT;

    if unique_violation {
        let mentions_slug = message.contains("slug")
            || body.details.as_deref().is_some_and(|d| d.contains("slug"));
        return if mentions_slug {
            DomainError::new(ErrorCode::SlugTaken, "Slug is already taken").with_detail("field", "slug")
        } else {
            DomainError::new(ErrorCode::ProfileAlreadyExists, message)
        };
    }

    match status.as_u16() {
        401 => DomainError::new(ErrorCode::Unauthorized, message),
        403 => DomainError::new(ErrorCode::Forbidden, message),
        400 | 422 => DomainError::new(ErrorCode::ValidationFailed, message),
        _ => DomainError::backend(format!("Unexpected status {}: {}", status, message)),
    }
}

pub(crate) async fn parse_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, DomainError> {
    response
        .json()
        .await
        .map_err(|e| DomainError::backend(format!("Failed to parse backend response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> SupabaseClient {
        SupabaseClient::new(SupabaseConfig::new(url, "anon")).unwrap()
    }

    #[test]
    fn builds_endpoint_urls() {
        let client = client("https://abc.supabase.co/");
        assert_eq!(client.auth_url("signup"), "https://abc.supabase.co/auth/v1/signup");
        assert_eq!(client.rest_url("profiles"), "https://abc.supabase.co/rest/v1/profiles");
    }

    #[test]
    fn data_key_prefers_service_key() {
        let config = SupabaseConfig::new("https://x", "anon-key");
        assert_eq!(config.data_key(), "anon-key");
        let config = config.with_service_key("service-key");
        assert_eq!(config.data_key(), "service-key");
    }

    #[test]
    fn debug_hides_keys() {
        let config = SupabaseConfig::new("https://x", "anon-key-value");
        assert!(!format!("{:?}", config).contains("anon-key-value"));
    }

    #[test]
    fn unique_violation_on_slug_is_slug_taken() {
        let body = RestErrorBody {
            code: Some("23505".to_string()),
            message: Some("duplicate key value violates unique constraint \"profiles_slug_key\"".to_string()),
            details: None,
        };
        let err = rest_error(StatusCode::CONFLICT, body, "");
        assert_eq!(err.code, ErrorCode::SlugTaken);
    }

    #[test]
    fn unique_violation_on_id_is_already_exists() {
        let body = RestErrorBody {
            code: Some("23505".to_string()),
            message: Some("duplicate key value violates unique constraint \"profiles_pkey\"".to_string()),
            details: Some("Key (id)=(u1) already exists.".to_string()),
        };
        let err = rest_error(StatusCode::CONFLICT, body, "");
        assert_eq!(err.code, ErrorCode::ProfileAlreadyExists);
    }

    #[test]
    fn server_errors_are_backend_errors() {
        let err = rest_error(StatusCode::BAD_GATEWAY, RestErrorBody::default(), "upstream down");
        assert_eq!(err.code, ErrorCode::BackendError);
        assert!(err.message.contains("upstream down"));
    }
}
