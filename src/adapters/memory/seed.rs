//! YAML seed data for the in-memory backend.
//!
//! A seed file lists demo accounts, profiles and projects:
//!
//! ```yaml
//! accounts:
//!   - id: usr-ana
//!     email: ana@example.com
//!     password: demo-password
//! profiles:
//!   - id: usr-ana
//!     username: anabuilds
//!     slug: ana-builds
//!     full_name: Ana Builds
//!     industry: Construction
//!     service_areas: ["Austin, TX"]
//!     contact: { email: ana@example.com }
//!     created_at: 2024-01-10T00:00:00Z
//! projects:
//!   - profile_id: usr-ana
//!     title: Backyard Deck
//!     category: Carpentry
//!     date: 2024-03-01
//! ```

use chrono::NaiveDate;
use secrecy::Secret;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::{
    clean_entries, non_blank, ProfileId, ProjectId, Slug, Timestamp, ValidationError,
};
use crate::domain::profile::{ContactInfo, Industry, Profile};
use crate::domain::project::{NewPhoto, Photo, Project};

/// Errors while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid seed record '{record}': {source}")]
    Invalid {
        record: String,
        #[source]
        source: ValidationError,
    },

    #[error("Project '{title}' references unknown profile '{profile_id}'")]
    UnknownOwner { title: String, profile_id: String },
}

/// A demo account for the mock identity provider.
#[derive(Debug, Deserialize)]
pub struct SeedAccount {
    pub id: String,
    pub email: String,
    pub password: Secret<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Parsed and validated seed contents.
#[derive(Debug, Default)]
pub struct DirectorySeed {
    pub accounts: Vec<SeedAccount>,
    pub profiles: Vec<Profile>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    accounts: Vec<SeedAccount>,
    #[serde(default)]
    profiles: Vec<SeedProfile>,
    #[serde(default)]
    projects: Vec<SeedProject>,
}

#[derive(Debug, Deserialize)]
struct SeedProfile {
    id: String,
    username: String,
    slug: String,
    full_name: String,
    #[serde(default)]
    profile_image: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    specialties: Vec<String>,
    #[serde(default)]
    service_areas: Vec<String>,
    contact: ContactInfo,
    #[serde(default = "default_true")]
    is_public: bool,
    created_at: Timestamp,
    #[serde(default)]
    updated_at: Option<Timestamp>,
}

#[derive(Debug, Deserialize)]
struct SeedProject {
    #[serde(default)]
    id: Option<ProjectId>,
    profile_id: String,
    title: String,
    #[serde(default)]
    description: String,
    category: String,
    date: NaiveDate,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    client_name: Option<String>,
    #[serde(default = "default_true")]
    is_public: bool,
    #[serde(default)]
    photos: Vec<NewPhoto>,
    #[serde(default)]
    created_at: Option<Timestamp>,
}

fn default_true() -> bool {
    true
}

/// Reads and validates a seed file.
pub fn load_seed(path: &Path) -> Result<DirectorySeed, SeedError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_seed(&yaml)
}

/// Parses seed YAML.
///
/// Unknown industry names are dropped with a warning rather than failing the
/// whole file; such profiles never match an industry filter.
pub fn parse_seed(yaml: &str) -> Result<DirectorySeed, SeedError> {
    let file: SeedFile = serde_yaml::from_str(yaml)?;

    let profiles = file
        .profiles
        .into_iter()
        .map(SeedProfile::into_profile)
        .collect::<Result<Vec<_>, _>>()?;

    let mut projects = Vec::with_capacity(file.projects.len());
    for seed in file.projects {
        if !profiles.iter().any(|p| p.id().as_str() == seed.profile_id) {
            return Err(SeedError::UnknownOwner {
                title: seed.title,
                profile_id: seed.profile_id,
            });
        }
        projects.push(seed.into_project()?);
    }

    tracing::debug!(
        accounts = file.accounts.len(),
        profiles = profiles.len(),
        projects = projects.len(),
        "Parsed directory seed"
    );

    Ok(DirectorySeed {
        accounts: file.accounts,
        profiles,
        projects,
    })
}

impl SeedProfile {
    fn into_profile(self) -> Result<Profile, SeedError> {
        let record = self.slug.clone();
        let invalid = |source| SeedError::Invalid {
            record: record.clone(),
            source,
        };

        let id = ProfileId::new(self.id).map_err(invalid)?;
        let slug = Slug::parse(self.slug).map_err(invalid)?;
        let contact = self.contact.normalized().map_err(invalid)?;
        let industry = non_blank(self.industry).and_then(|name| {
            let industry = Industry::from_name(&name);
            if industry.is_none() {
                tracing::warn!(profile = %slug, industry = %name, "Ignoring unknown industry");
            }
            industry
        });

        Ok(Profile::reconstitute(
            id,
            self.username,
            slug,
            self.full_name,
            non_blank(self.profile_image),
            non_blank(self.company_name),
            non_blank(self.bio),
            industry,
            clean_entries(self.specialties),
            clean_entries(self.service_areas),
            contact,
            self.is_public,
            self.created_at,
            self.updated_at.unwrap_or(self.created_at),
        ))
    }
}

impl SeedProject {
    fn into_project(self) -> Result<Project, SeedError> {
        let record = self.title.clone();
        let invalid = |source| SeedError::Invalid {
            record: record.clone(),
            source,
        };

        let id = self.id.unwrap_or_default();
        let owner = ProfileId::new(self.profile_id).map_err(invalid)?;
        let photos = self
            .photos
            .into_iter()
            .map(|photo| Photo::new(id, photo))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;
        let created_at = self.created_at.unwrap_or_default();

        Ok(Project::reconstitute(
            id,
            owner,
            self.title,
            self.description,
            self.category,
            self.date,
            non_blank(self.location),
            non_blank(self.client_name),
            self.is_public,
            photos,
            created_at,
            created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"
accounts:
  - id: usr-ana
    email: ana@example.com
    password: demo-password
profiles:
  - id: usr-ana
    username: anabuilds
    slug: ana-builds
    full_name: Ana Builds
    industry: Construction
    specialties: ["Decks", ""]
    service_areas: ["Austin, TX"]
    contact: { email: ana@example.com, phone: "" }
    created_at: 2024-01-10T00:00:00Z
  - id: usr-bo
    username: bo
    slug: bo-roofing
    full_name: Bo Roofing
    industry: Roofing
    contact: { email: bo@example.com }
    created_at: 2024-02-10T00:00:00Z
projects:
  - profile_id: usr-ana
    title: Backyard Deck
    category: Carpentry
    date: 2024-03-01
    photos:
      - url: https://cdn.example.com/deck.jpg
"#;

    #[test]
    fn parses_profiles_projects_and_accounts() {
        let seed = parse_seed(SEED).unwrap();

        assert_eq!(seed.accounts.len(), 1);
        assert_eq!(seed.profiles.len(), 2);
        assert_eq!(seed.projects.len(), 1);

        let ana = &seed.profiles[0];
        assert_eq!(ana.industry(), Some(Industry::Construction));
        assert_eq!(ana.specialties(), ["Decks"]);
        assert!(ana.contact().phone.is_none());
        assert_eq!(seed.projects[0].photos()[0].project_id, seed.projects[0].id());
    }

    #[test]
    fn unknown_industry_becomes_absent() {
        let seed = parse_seed(SEED).unwrap();
        assert_eq!(seed.profiles[1].industry(), None);
    }

    #[test]
    fn project_with_unknown_owner_is_rejected() {
        let yaml = r#"
projects:
  - profile_id: nobody
    title: Orphan
    category: Misc
    date: 2024-01-01
"#;
        assert!(matches!(parse_seed(yaml), Err(SeedError::UnknownOwner { .. })));
    }

    #[test]
    fn invalid_slug_is_reported() {
        let yaml = r#"
profiles:
  - id: x
    username: x
    slug: "Not A Slug"
    full_name: X
    contact: { email: x@example.com }
    created_at: 2024-01-01T00:00:00Z
"#;
        assert!(matches!(parse_seed(yaml), Err(SeedError::Invalid { .. })));
    }

    #[test]
    fn load_seed_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert_eq!(seed.profiles.len(), 2);
    }

    #[test]
    fn load_seed_missing_file_is_io_error() {
        let result = load_seed(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }
}
