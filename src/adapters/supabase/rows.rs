//! Table row shapes for the data API and their domain conversions.
//!
//! Columns are snake_case; `contact_info` is a JSON column and list columns
//! are text arrays. Nulls in list columns read as empty lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    clean_entries, non_blank, PhotoId, ProfileId, ProjectId, Slug, Timestamp, ValidationError,
};
use crate::domain::profile::{ContactInfo, Industry, Profile};
use crate::domain::project::{Photo, Project};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProfileRow {
    pub id: String,
    pub username: String,
    pub slug: String,
    pub full_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
    #[serde(default)]
    pub service_areas: Option<Vec<String>>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

fn default_true() -> bool {
    true
}

impl ProfileRow {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            id: profile.id().as_str().to_string(),
            username: profile.username().to_string(),
            slug: profile.slug().as_str().to_string(),
            full_name: profile.full_name().to_string(),
            profile_image: profile.profile_image().map(str::to_string),
            company_name: profile.company_name().map(str::to_string),
            bio: profile.bio().map(str::to_string),
            industry: profile.industry().map(|i| i.name().to_string()),
            specialties: Some(profile.specialties().to_vec()),
            service_areas: Some(profile.service_areas().to_vec()),
            contact_info: Some(profile.contact().clone()),
            is_public: profile.is_public(),
            created_at: *profile.created_at(),
            updated_at: Some(*profile.updated_at()),
        }
    }

    /// Converts a stored row into a profile.
    ///
    /// Unknown industries read as absent. A missing contact record or an
    /// invalid slug makes the row unusable.
    pub fn into_profile(self) -> Result<Profile, ValidationError> {
        let id = ProfileId::new(self.id)?;
        let slug = Slug::parse(self.slug)?;
        let contact = self
            .contact_info
            .ok_or_else(|| ValidationError::empty_field("contact_info"))?
            .normalized()?;
        let industry = non_blank(self.industry).and_then(|name| Industry::from_name(&name));

        Ok(Profile::reconstitute(
            id,
            self.username,
            slug,
            self.full_name,
            non_blank(self.profile_image),
            non_blank(self.company_name),
            non_blank(self.bio),
            industry,
            clean_entries(self.specialties.unwrap_or_default()),
            clean_entries(self.service_areas.unwrap_or_default()),
            contact,
            self.is_public,
            self.created_at,
            self.updated_at.unwrap_or(self.created_at),
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProjectRow {
    pub id: ProjectId,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    /// Embedded on reads only.
    #[serde(default, skip_serializing)]
    pub photos: Vec<PhotoRow>,
}

impl ProjectRow {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id(),
            user_id: project.owner().as_str().to_string(),
            title: project.title().to_string(),
            description: Some(project.description().to_string()),
            category: project.category().to_string(),
            date: project.date(),
            location: project.location().map(str::to_string),
            client_name: project.client_name().map(str::to_string),
            is_public: project.is_public(),
            created_at: *project.created_at(),
            updated_at: Some(*project.updated_at()),
            photos: Vec::new(),
        }
    }

    pub fn into_project(self) -> Result<Project, ValidationError> {
        let owner = ProfileId::new(self.user_id)?;
        let mut rows = self.photos;
        rows.sort_by_key(|row| row.position);
        let photos = rows.into_iter().map(PhotoRow::into_photo).collect();

        Ok(Project::reconstitute(
            self.id,
            owner,
            self.title,
            self.description.unwrap_or_default(),
            self.category,
            self.date,
            non_blank(self.location),
            non_blank(self.client_name),
            self.is_public,
            photos,
            self.created_at,
            self.updated_at.unwrap_or(self.created_at),
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PhotoRow {
    pub id: PhotoId,
    pub project_id: ProjectId,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Gallery order.
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl PhotoRow {
    pub fn from_photo(photo: &Photo, position: usize) -> Self {
        Self {
            id: photo.id,
            project_id: photo.project_id,
            url: photo.url.clone(),
            thumbnail_url: Some(photo.thumbnail_url.clone()),
            caption: photo.caption.clone(),
            notes: photo.notes.clone(),
            tags: Some(photo.tags.clone()),
            position: i32::try_from(position).unwrap_or(i32::MAX),
            created_at: Some(photo.created_at),
        }
    }

    fn into_photo(self) -> Photo {
        let thumbnail_url = non_blank(self.thumbnail_url).unwrap_or_else(|| self.url.clone());
        Photo {
            id: self.id,
            project_id: self.project_id,
            url: self.url,
            thumbnail_url,
            caption: non_blank(self.caption),
            notes: non_blank(self.notes),
            tags: clean_entries(self.tags.unwrap_or_default()),
            created_at: self.created_at.unwrap_or_default(),
        }
    }
}
