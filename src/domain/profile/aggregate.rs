//! Profile aggregate entity.
//!
//! A profile is the public face of a service professional. Exactly one
//! profile exists per account; it shares the account's identity and is
//! mutated only by its owner.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    clean_entries, non_blank, ProfileId, Slug, Timestamp, UserId, ValidationError,
};

use super::{ContactInfo, Industry};

/// Maximum length for a display name.
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length for a bio.
pub const MAX_BIO_LENGTH: usize = 5000;

/// Profile aggregate - a professional's directory listing.
///
/// # Invariants
///
/// - `id` is immutable once assigned
/// - `slug` is URL-safe (uniqueness is enforced by the store)
/// - `username` and `full_name` are non-empty
/// - optional text fields are never blank (`None` instead)
/// - `specialties` / `service_areas` hold no blanks or duplicates; empty means
///   "not declared"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    username: String,
    slug: Slug,
    full_name: String,
    profile_image: Option<String>,
    company_name: Option<String>,
    bio: Option<String>,
    industry: Option<Industry>,
    specialties: Vec<String>,
    service_areas: Vec<String>,
    contact: ContactInfo,
    is_public: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Fields supplied at registration.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub username: String,
    pub full_name: String,
    pub company_name: Option<String>,
}

/// Partial profile update.
///
/// `None` leaves a field unchanged. For optional text fields, a blank string
/// clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub profile_image: Option<String>,
    pub company_name: Option<String>,
    pub bio: Option<String>,
    /// Industry display name; blank clears it.
    pub industry: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub service_areas: Option<Vec<String>>,
    pub contact: Option<ContactInfo>,
    pub is_public: Option<bool>,
}

impl ProfileUpdate {
    /// True if the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.profile_image.is_none()
            && self.company_name.is_none()
            && self.bio.is_none()
            && self.industry.is_none()
            && self.specialties.is_none()
            && self.service_areas.is_none()
            && self.contact.is_none()
            && self.is_public.is_none()
    }
}

impl Profile {
    /// Creates a freshly registered, public profile for an account.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if username or full name is blank
    /// - `TooLong` if the full name exceeds [`MAX_NAME_LENGTH`]
    /// - `InvalidFormat` if the email is malformed
    pub fn register(
        owner: &UserId,
        slug: Slug,
        email: &str,
        new_profile: NewProfile,
    ) -> Result<Self, ValidationError> {
        let username = required_text("username", &new_profile.username)?;
        let full_name = validate_name(&new_profile.full_name)?;
        let contact = ContactInfo::with_email(email)?;

        let now = Timestamp::now();
        Ok(Self {
            id: ProfileId::for_user(owner),
            username,
            slug,
            full_name,
            profile_image: None,
            company_name: non_blank(new_profile.company_name),
            bio: None,
            industry: None,
            specialties: Vec::new(),
            service_areas: Vec::new(),
            contact,
            is_public: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a profile from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProfileId,
        username: String,
        slug: Slug,
        full_name: String,
        profile_image: Option<String>,
        company_name: Option<String>,
        bio: Option<String>,
        industry: Option<Industry>,
        specialties: Vec<String>,
        service_areas: Vec<String>,
        contact: ContactInfo,
        is_public: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            username,
            slug,
            full_name,
            profile_image,
            company_name,
            bio,
            industry,
            specialties,
            service_areas,
            contact,
            is_public,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Display name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn service_areas(&self) -> &[String] {
        &self.service_areas
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given account owns this profile.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        self.id.is_owned_by(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update. Nothing changes if validation fails.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` for an invalid full name or bio
    /// - `InvalidFormat` for an unknown industry or malformed contact email
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), ValidationError> {
        let full_name = update
            .full_name
            .as_deref()
            .map(validate_name)
            .transpose()?;

        let industry = match update.industry.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(None),
            Some(name) => Some(Some(Industry::from_name(name).ok_or_else(|| {
                ValidationError::invalid_format("industry", format!("unknown industry '{}'", name))
            })?)),
        };

        let bio = match update.bio {
            Some(bio) => {
                let bio = non_blank(Some(bio));
                if let Some(text) = &bio {
                    let len = text.chars().count();
                    if len > MAX_BIO_LENGTH {
                        return Err(ValidationError::too_long("bio", MAX_BIO_LENGTH, len));
                    }
                }
                Some(bio)
            }
            None => None,
        };

        let contact = update.contact.map(ContactInfo::normalized).transpose()?;

        if let Some(full_name) = full_name {
            self.full_name = full_name;
        }
        if let Some(image) = update.profile_image {
            self.profile_image = non_blank(Some(image));
        }
        if let Some(company) = update.company_name {
            self.company_name = non_blank(Some(company));
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(industry) = industry {
            self.industry = industry;
        }
        if let Some(specialties) = update.specialties {
            self.specialties = clean_entries(specialties);
        }
        if let Some(areas) = update.service_areas {
            self.service_areas = clean_entries(areas);
        }
        if let Some(contact) = contact {
            self.contact = contact;
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn validate_name(value: &str) -> Result<String, ValidationError> {
    let name = required_text("full_name", value)?;
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::too_long("full_name", MAX_NAME_LENGTH, len));
    }
    Ok(name)
}
