//! URL-safe slug value object used for public profile addresses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Maximum length for a slug.
pub const MAX_SLUG_LENGTH: usize = 64;

/// URL-safe handle: lowercase ASCII alphanumerics separated by single hyphens.
///
/// # Invariants
///
/// - 1..=64 characters
/// - matches `[a-z0-9]+(-[a-z0-9]+)*`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validates an existing slug.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if value.len() > MAX_SLUG_LENGTH {
            return Err(ValidationError::too_long("slug", MAX_SLUG_LENGTH, value.len()));
        }
        let well_formed = value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        if !well_formed {
            return Err(ValidationError::invalid_format(
                "slug",
                "only lowercase letters, digits and single hyphens are allowed",
            ));
        }
        Ok(Self(value))
    }

    /// Derives a slug from free text ("Jane's Plumbing & Co." -> "janes-plumbing-co").
    ///
    /// Common Latin accents are folded to ASCII; other characters act as separators.
    pub fn from_text(text: &str) -> Result<Self, ValidationError> {
        let mut slug = String::with_capacity(text.len());
        let mut pending_hyphen = false;

        for c in text.chars() {
            if c == '\'' || c == '\u{2019}' {
                continue;
            }
            let folded = fold_latin(c);
            match folded {
                Some(ascii) if ascii.is_ascii_alphanumeric() => {
                    if pending_hyphen && !slug.is_empty() {
                        slug.push('-');
                    }
                    pending_hyphen = false;
                    slug.push(ascii.to_ascii_lowercase());
                }
                _ => pending_hyphen = true,
            }
        }

        if slug.len() > MAX_SLUG_LENGTH {
            slug.truncate(MAX_SLUG_LENGTH);
            while slug.ends_with('-') {
                slug.pop();
            }
        }

        if slug.is_empty() {
            return Err(ValidationError::invalid_format(
                "slug",
                "text contains no letters or digits",
            ));
        }
        Ok(Self(slug))
    }

    /// Returns the `n`th disambiguated variant (`base-2`, `base-3`, ...).
    ///
    /// `n <= 1` returns the slug unchanged. The base is shortened when needed so
    /// the result still fits the length limit.
    pub fn with_suffix(&self, n: u32) -> Self {
        if n <= 1 {
            return self.clone();
        }
        let suffix = format!("-{}", n);
        let mut base = self.0.clone();
        if base.len() + suffix.len() > MAX_SLUG_LENGTH {
            base.truncate(MAX_SLUG_LENGTH - suffix.len());
            while base.ends_with('-') {
                base.pop();
            }
        }
        Self(format!("{}{}", base, suffix))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Folds common accented Latin letters to their ASCII base letter.
///
/// ASCII passes through unchanged; anything else yields `None`.
pub fn fold_latin(c: char) -> Option<char> {
    if c.is_ascii() {
        return Some(c);
    }
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        _ => return None,
    };
    Some(folded)
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Slug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_well_formed_slug() {
        assert_eq!(Slug::parse("jane-doe-2").unwrap().as_str(), "jane-doe-2");
    }

    #[test]
    fn parse_rejects_uppercase_and_double_hyphens() {
        assert!(Slug::parse("Jane").is_err());
        assert!(Slug::parse("jane--doe").is_err());
        assert!(Slug::parse("-jane").is_err());
        assert!(Slug::parse("jane-").is_err());
        assert!(Slug::parse("").is_err());
    }

    #[test]
    fn parse_rejects_overlong_slug() {
        let long = "a".repeat(MAX_SLUG_LENGTH + 1);
        assert!(matches!(
            Slug::parse(long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn from_text_slugifies_names() {
        assert_eq!(
            Slug::from_text("Jane's Plumbing & Co.").unwrap().as_str(),
            "janes-plumbing-co"
        );
        assert_eq!(Slug::from_text("  Zoë Ángel ").unwrap().as_str(), "zoe-angel");
    }

    #[test]
    fn from_text_rejects_text_without_alphanumerics() {
        assert!(Slug::from_text("!!! ---").is_err());
    }

    #[test]
    fn with_suffix_appends_counter() {
        let slug = Slug::parse("jane").unwrap();
        assert_eq!(slug.with_suffix(1).as_str(), "jane");
        assert_eq!(slug.with_suffix(3).as_str(), "jane-3");
    }

    #[test]
    fn with_suffix_respects_length_limit() {
        let slug = Slug::parse("a".repeat(MAX_SLUG_LENGTH)).unwrap();
        let suffixed = slug.with_suffix(12);
        assert!(suffixed.as_str().len() <= MAX_SLUG_LENGTH);
        assert!(suffixed.as_str().ends_with("-12"));
        assert!(Slug::parse(suffixed.as_str()).is_ok());
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Slug>("\"ok-slug\"").is_ok());
        assert!(serde_json::from_str::<Slug>("\"Bad Slug\"").is_err());
    }
}
