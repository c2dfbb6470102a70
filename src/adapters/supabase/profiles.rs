//! Profile repository backed by the hosted data API (`/rest/v1/profiles`).

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Slug};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

use super::client::{check_rest, parse_json, transport_error, SupabaseClient};
use super::rows::ProfileRow;

const TABLE: &str = "profiles";

#[derive(Debug, Clone)]
pub struct SupabaseProfileRepository {
    client: SupabaseClient,
}

impl SupabaseProfileRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, column: &str, value: &str) -> Result<Vec<ProfileRow>, DomainError> {
        let response = self
            .client
            .rest_request(Method::GET, TABLE)
            .query(&[("select", "*".to_string()), (column, format!("eq.{}", value))])
            .send()
            .await
            .map_err(transport_error)?;
        parse_json(check_rest(response).await?).await
    }

    async fn fetch_one(&self, column: &str, value: &str) -> Result<Option<Profile>, DomainError> {
        match self.fetch(column, value).await?.into_iter().next() {
            Some(row) => row.into_profile().map(Some).map_err(DomainError::from),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
        let response = self
            .client
            .rest_request(Method::GET, TABLE)
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<ProfileRow> = parse_json(check_rest(response).await?).await?;

        let total = rows.len();
        let profiles: Vec<Profile> = rows
            .into_iter()
            .filter_map(|row| {
                let slug = row.slug.clone();
                row.into_profile()
                    .map_err(|e| tracing::warn!(slug = %slug, error = %e, "Skipping malformed profile row"))
                    .ok()
            })
            .collect();
        tracing::debug!(total, usable = profiles.len(), "Fetched profiles");
        Ok(profiles)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Profile>, DomainError> {
        self.fetch_one("slug", slug.as_str()).await
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        self.fetch_one("id", id.as_str()).await
    }

    async fn create(&self, profile: &Profile) -> Result<(), DomainError> {
        let response = self
            .client
            .rest_request(Method::POST, TABLE)
            .header("Prefer", "return=minimal")
            .json(&ProfileRow::from_profile(profile))
            .send()
            .await
            .map_err(transport_error)?;
        check_rest(response).await?;
        tracing::info!(profile_id = %profile.id(), slug = %profile.slug(), "Profile created");
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let response = self
            .client
            .rest_request(Method::PATCH, TABLE)
            .query(&[("id", format!("eq.{}", profile.id()))])
            .header("Prefer", "return=representation")
            .json(&ProfileRow::from_profile(profile))
            .send()
            .await
            .map_err(transport_error)?;
        let updated: Vec<serde_json::Value> = parse_json(check_rest(response).await?).await?;
        if updated.is_empty() {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile {} not found", profile.id()),
            ));
        }
        Ok(())
    }

    async fn slug_exists(&self, slug: &Slug) -> Result<bool, DomainError> {
        Ok(!self.fetch("slug", slug.as_str()).await?.is_empty())
    }
}
