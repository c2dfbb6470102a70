//! Photo entity belonging to a project.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    clean_entries, non_blank, PhotoId, ProjectId, Timestamp, ValidationError,
};

/// A single image in a project's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub project_id: ProjectId,
    /// Full-resolution image URL.
    pub url: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

/// Data for attaching a new photo to a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPhoto {
    pub url: String,
    /// Falls back to `url` when absent.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Photo {
    /// Builds a photo for the given project.
    ///
    /// # Errors
    ///
    /// `EmptyField` if the URL is blank.
    pub fn new(project_id: ProjectId, new_photo: NewPhoto) -> Result<Self, ValidationError> {
        let url = new_photo.url.trim();
        if url.is_empty() {
            return Err(ValidationError::empty_field("url"));
        }
        let thumbnail_url = non_blank(new_photo.thumbnail_url).unwrap_or_else(|| url.to_string());
        Ok(Self {
            id: PhotoId::new(),
            project_id,
            url: url.to_string(),
            thumbnail_url,
            caption: non_blank(new_photo.caption),
            notes: non_blank(new_photo.notes),
            tags: clean_entries(new_photo.tags),
            created_at: Timestamp::now(),
        })
    }
}
