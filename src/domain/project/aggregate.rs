//! Project aggregate - a portfolio entry with a photo gallery.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    non_blank, PhotoId, ProfileId, ProjectId, Timestamp, UserId, ValidationError,
};

use super::{Gallery, NewPhoto, Photo};

/// Maximum length for a project title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Project aggregate.
///
/// # Invariants
///
/// - `title` and `category` are non-empty
/// - every photo's `project_id` equals `id`
/// - `owner` never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    owner: ProfileId,
    title: String,
    description: String,
    category: String,
    date: NaiveDate,
    location: Option<String>,
    client_name: Option<String>,
    is_public: bool,
    photos: Vec<Photo>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Data for creating a project.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default)]
    pub photos: Vec<NewPhoto>,
}

fn default_public() -> bool {
    true
}

/// Partial project update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub client_name: Option<String>,
    pub is_public: Option<bool>,
}

impl Project {
    /// Creates a project owned by `owner`, attaching any initial photos.
    pub fn new(owner: ProfileId, new_project: NewProject) -> Result<Self, ValidationError> {
        let title = validate_title(&new_project.title)?;
        let category = required("category", &new_project.category)?;
        let id = ProjectId::new();
        let photos = new_project
            .photos
            .into_iter()
            .map(|photo| Photo::new(id, photo))
            .collect::<Result<Vec<_>, _>>()?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            owner,
            title,
            description: new_project.description.trim().to_string(),
            category,
            date: new_project.date,
            location: non_blank(new_project.location),
            client_name: non_blank(new_project.client_name),
            is_public: new_project.is_public,
            photos,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a project from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProjectId,
        owner: ProfileId,
        title: String,
        description: String,
        category: String,
        date: NaiveDate,
        location: Option<String>,
        client_name: Option<String>,
        is_public: bool,
        photos: Vec<Photo>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner,
            title,
            description,
            category,
            date,
            location,
            client_name,
            is_public,
            photos,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn owner(&self) -> &ProfileId {
        &self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Project date as "Month YYYY", e.g. "March 2024".
    pub fn display_date(&self) -> String {
        self.date.format("%B %Y").to_string()
    }

    /// First photo, shown on project cards.
    pub fn cover_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }

    pub fn gallery(&self) -> Gallery<'_> {
        Gallery::new(&self.photos)
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner.is_owned_by(user_id)
    }

    /// Public projects are visible to everyone; private ones only to the owner.
    pub fn is_visible_to(&self, viewer: Option<&UserId>) -> bool {
        self.is_public || viewer.is_some_and(|user| self.is_owned_by(user))
    }

    /// Applies a partial update. Nothing changes if validation fails.
    pub fn apply(&mut self, update: ProjectUpdate) -> Result<(), ValidationError> {
        let title = update.title.as_deref().map(validate_title).transpose()?;
        let category = update
            .category
            .as_deref()
            .map(|c| required("category", c))
            .transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(location) = update.location {
            self.location = non_blank(Some(location));
        }
        if let Some(client) = update.client_name {
            self.client_name = non_blank(Some(client));
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
        }
        self.touch();
        Ok(())
    }

    /// Appends a photo to the end of the gallery.
    pub fn add_photo(&mut self, new_photo: NewPhoto) -> Result<&Photo, ValidationError> {
        let photo = Photo::new(self.id, new_photo)?;
        self.photos.push(photo);
        self.touch();
        Ok(&self.photos[self.photos.len() - 1])
    }

    /// Removes a photo, returning it if it was present.
    pub fn remove_photo(&mut self, photo_id: PhotoId) -> Option<Photo> {
        let position = self.photos.iter().position(|p| p.id == photo_id)?;
        let removed = self.photos.remove(position);
        self.touch();
        Some(removed)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn validate_title(value: &str) -> Result<String, ValidationError> {
    let title = required("title", value)?;
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, len));
    }
    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner_user() -> UserId {
        UserId::new("owner-1").unwrap()
    }

    fn new_project() -> NewProject {
        NewProject {
            title: "Kitchen Remodel".to_string(),
            description: "Full gut renovation".to_string(),
            category: "Renovation".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            location: Some("".to_string()),
            client_name: Some("The Smiths".to_string()),
            is_public: false,
            photos: vec![NewPhoto {
                url: "https://cdn.example.com/kitchen.jpg".to_string(),
                ..Default::default()
            }],
        }
    }

    fn project() -> Project {
        Project::new(ProfileId::for_user(&owner_user()), new_project()).unwrap()
    }

    #[test]
    fn new_attaches_photos_to_project() {
        let project = project();
        assert_eq!(project.photos().len(), 1);
        assert_eq!(project.photos()[0].project_id, project.id());
        assert!(project.location().is_none());
        assert_eq!(project.client_name(), Some("The Smiths"));
    }

    #[test]
    fn new_rejects_blank_title() {
        let mut data = new_project();
        data.title = "  ".to_string();
        let result = Project::new(ProfileId::for_user(&owner_user()), data);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn display_date_is_month_and_year() {
        assert_eq!(project().display_date(), "March 2024");
    }

    #[test]
    fn cover_photo_is_first() {
        let mut project = project();
        let first = project.photos()[0].id;
        project
            .add_photo(NewPhoto {
                url: "https://cdn.example.com/second.jpg".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(project.cover_photo().map(|p| p.id), Some(first));
    }

    #[test]
    fn private_project_visible_only_to_owner() {
        let project = project();
        let stranger = UserId::new("someone-else").unwrap();

        assert!(project.is_visible_to(Some(&owner_user())));
        assert!(!project.is_visible_to(Some(&stranger)));
        assert!(!project.is_visible_to(None));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut project = project();
        let before = project.clone();
        let result = project.apply(ProjectUpdate {
            title: Some("New title".to_string()),
            category: Some("".to_string()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(project, before);
    }

    #[test]
    fn remove_photo_returns_removed() {
        let mut project = project();
        let id = project.photos()[0].id;

        assert!(project.remove_photo(id).is_some());
        assert!(project.photos().is_empty());
        assert!(project.remove_photo(id).is_none());
    }
}
