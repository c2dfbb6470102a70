//! Query and response types for directory endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::profile::dto::ProfileCardResponse;
use crate::domain::directory::{DirectoryFacets, FilterSpec, SortMode};
use crate::domain::foundation::ValidationError;

/// Query string of `GET /api/directory`.
///
/// Every parameter is optional; an empty value means "All".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl DirectoryQueryParams {
    /// Converts the raw query into a filter, rejecting unknown sort modes.
    pub fn into_filter(self) -> Result<FilterSpec, ValidationError> {
        let sort_by = match self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<SortMode>()?,
            None => SortMode::default(),
        };
        Ok(FilterSpec {
            search_term: self.q,
            industry: self.industry,
            location: self.location,
            specialty: self.specialty,
            sort_by,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryResponse {
    pub profiles: Vec<ProfileCardResponse>,
    /// Number of listed profiles before filtering.
    pub total: usize,
    pub filter: FilterSpec,
    pub has_active_filters: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetsResponse {
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub specialties: Vec<String>,
    pub sort_modes: Vec<String>,
}

impl From<DirectoryFacets> for FacetsResponse {
    fn from(facets: DirectoryFacets) -> Self {
        Self {
            industries: facets
                .industries
                .iter()
                .map(|i| i.name().to_string())
                .collect(),
            locations: facets.locations,
            specialties: facets.specialties,
            sort_modes: [SortMode::Recent, SortMode::Alphabetical, SortMode::Rating]
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}
