//! Request and response types for project endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::profile::dto::ProfileCardResponse;
use crate::domain::foundation::PhotoId;
use crate::domain::project::{NewPhoto, Photo, Project, ProjectUpdate};

/// Partial update plus photo changes, as sent by the project editor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(flatten)]
    pub update: ProjectUpdate,
    #[serde(default)]
    pub add_photos: Vec<NewPhoto>,
    #[serde(default)]
    pub remove_photos: Vec<PhotoId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: String,
    pub url: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Photo> for PhotoResponse {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id.to_string(),
            url: photo.url.clone(),
            thumbnail_url: photo.thumbnail_url.clone(),
            caption: photo.caption.clone(),
            notes: photo.notes.clone(),
            tags: photo.tags.clone(),
        }
    }
}

/// Compact project shown in portfolio grids.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub display_date: String,
    pub location: Option<String>,
    pub is_public: bool,
    pub cover_photo: Option<PhotoResponse>,
    pub photo_count: usize,
}

impl From<&Project> for ProjectCardResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            category: project.category().to_string(),
            date: project.date(),
            display_date: project.display_date(),
            location: project.location().map(str::to_string),
            is_public: project.is_public(),
            cover_photo: project.cover_photo().map(PhotoResponse::from),
            photo_count: project.photos().len(),
        }
    }
}

/// Full project with its gallery.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub profile_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub display_date: String,
    pub location: Option<String>,
    pub client_name: Option<String>,
    pub is_public: bool,
    pub photos: Vec<PhotoResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            profile_id: project.owner().to_string(),
            title: project.title().to_string(),
            description: project.description().to_string(),
            category: project.category().to_string(),
            date: project.date(),
            display_date: project.display_date(),
            location: project.location().map(str::to_string),
            client_name: project.client_name().map(str::to_string),
            is_public: project.is_public(),
            photos: project.photos().iter().map(PhotoResponse::from).collect(),
            created_at: project.created_at().to_rfc3339(),
            updated_at: project.updated_at().to_rfc3339(),
        }
    }
}

/// Project page payload: the project and who made it.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPageResponse {
    pub project: ProjectResponse,
    pub owner: Option<ProfileCardResponse>,
    pub is_owner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProfileId;
    use crate::domain::project::NewProject;

    fn project() -> Project {
        Project::new(
            ProfileId::new("usr-ana").unwrap(),
            NewProject {
                title: "Backyard Deck".to_string(),
                description: String::new(),
                category: "Carpentry".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                location: None,
                client_name: None,
                is_public: true,
                photos: vec![NewPhoto {
                    url: "https://cdn.example.com/deck.jpg".to_string(),
                    ..Default::default()
                }],
            },
        )
        .unwrap()
    }

    #[test]
    fn card_uses_first_photo_as_cover() {
        let card = ProjectCardResponse::from(&project());
        assert_eq!(card.display_date, "March 2024");
        assert_eq!(card.photo_count, 1);
        assert_eq!(
            card.cover_photo.unwrap().thumbnail_url,
            "https://cdn.example.com/deck.jpg"
        );
    }

    #[test]
    fn update_request_flattens_fields() {
        let request: UpdateProjectRequest =
            serde_json::from_str(r#"{"title":"New","is_public":false}"#).unwrap();
        assert_eq!(request.update.title.as_deref(), Some("New"));
        assert_eq!(request.update.is_public, Some(false));
        assert!(request.add_photos.is_empty());
    }
}
