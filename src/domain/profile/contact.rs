//! Contact details published on a profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{non_blank, ValidationError};

/// Contact sub-record. Email is required; everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl ContactInfo {
    /// Creates contact info with only an email address.
    pub fn with_email(email: impl Into<String>) -> Result<Self, ValidationError> {
        Self {
            email: email.into(),
            phone: None,
            website: None,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
        .normalized()
    }

    /// Validates the email and maps blank optional fields to `None`.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let email = validate_email(&self.email)?;
        Ok(Self {
            email,
            phone: non_blank(self.phone),
            website: non_blank(self.website),
            address: non_blank(self.address),
            city: non_blank(self.city),
            state: non_blank(self.state),
            zip: non_blank(self.zip),
        })
    }

    /// Website without scheme or leading `www.`, for display.
    pub fn website_display(&self) -> Option<&str> {
        self.website.as_deref().map(|url| {
            let without_scheme = url
                .strip_prefix("https://")
                .or_else(|| url.strip_prefix("http://"))
                .unwrap_or(url);
            without_scheme.strip_prefix("www.").unwrap_or(without_scheme)
        })
    }

    /// "City, ST 12345" when both city and state are known.
    pub fn locality(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(match &self.zip {
                Some(zip) => format!("{}, {} {}", city, state, zip),
                None => format!("{}, {}", city, state),
            }),
            _ => None,
        }
    }
}

/// Minimal structural email check: non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| ValidationError::invalid_format("email", "missing @ symbol"))?;
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_format("email", "not a valid address"));
    }
    Ok(email.to_string())
}
