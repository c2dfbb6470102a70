//! Response types for profile endpoints.

use serde::Serialize;

use crate::adapters::http::projects::dto::ProjectCardResponse;
use crate::domain::profile::{ContactInfo, Profile};

/// Directory card: what a visitor sees before opening a profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCardResponse {
    pub id: String,
    pub slug: String,
    pub full_name: String,
    pub company_name: Option<String>,
    pub profile_image: Option<String>,
    pub industry: Option<String>,
    pub specialties: Vec<String>,
    pub service_areas: Vec<String>,
    pub locality: Option<String>,
    pub created_at: String,
}

impl From<&Profile> for ProfileCardResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            slug: profile.slug().to_string(),
            full_name: profile.full_name().to_string(),
            company_name: profile.company_name().map(str::to_string),
            profile_image: profile.profile_image().map(str::to_string),
            industry: profile.industry().map(|i| i.name().to_string()),
            specialties: profile.specialties().to_vec(),
            service_areas: profile.service_areas().to_vec(),
            locality: profile.contact().locality(),
            created_at: profile.created_at().to_rfc3339(),
        }
    }
}

/// Full profile as shown on the profile page and in the editor.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub slug: String,
    pub full_name: String,
    pub profile_image: Option<String>,
    pub company_name: Option<String>,
    pub bio: Option<String>,
    pub industry: Option<String>,
    pub specialties: Vec<String>,
    pub service_areas: Vec<String>,
    pub contact: ContactInfo,
    pub website_display: Option<String>,
    pub is_public: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            username: profile.username().to_string(),
            slug: profile.slug().to_string(),
            full_name: profile.full_name().to_string(),
            profile_image: profile.profile_image().map(str::to_string),
            company_name: profile.company_name().map(str::to_string),
            bio: profile.bio().map(str::to_string),
            industry: profile.industry().map(|i| i.name().to_string()),
            specialties: profile.specialties().to_vec(),
            service_areas: profile.service_areas().to_vec(),
            contact: profile.contact().clone(),
            website_display: profile.contact().website_display().map(str::to_string),
            is_public: profile.is_public(),
            created_at: profile.created_at().to_rfc3339(),
            updated_at: profile.updated_at().to_rfc3339(),
        }
    }
}

/// A profile page: the profile and the portfolio the viewer may see.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePageResponse {
    pub profile: ProfileResponse,
    pub projects: Vec<ProjectCardResponse>,
    pub is_owner: bool,
}
