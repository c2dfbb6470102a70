//! Directory filter specification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Result ordering for a directory search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest profiles first.
    #[default]
    Recent,
    /// By display name.
    Alphabetical,
    /// No rating data exists yet; input order is preserved.
    Rating,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Recent => "recent",
            SortMode::Alphabetical => "alphabetical",
            SortMode::Rating => "rating",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortMode::Recent),
            "alphabetical" => Ok(SortMode::Alphabetical),
            "rating" => Ok(SortMode::Rating),
            other => Err(ValidationError::invalid_format(
                "sort_by",
                format!("expected recent, alphabetical or rating, got '{}'", other),
            )),
        }
    }
}

/// What the visitor asked the directory for.
///
/// A facet holding an empty string is treated the same as an absent one,
/// matching the "All ..." option of the filter form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Free-text query. Collected and echoed back, but not used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Exact industry display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Substring of a service area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Substring of a specialty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default)]
    pub sort_by: SortMode,
}

impl FilterSpec {
    pub fn new(sort_by: SortMode) -> Self {
        Self {
            sort_by,
            ..Default::default()
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn industry_filter(&self) -> Option<&str> {
        populated(&self.industry)
    }

    pub fn location_filter(&self) -> Option<&str> {
        populated(&self.location)
    }

    pub fn specialty_filter(&self) -> Option<&str> {
        populated(&self.specialty)
    }

    pub fn search_filter(&self) -> Option<&str> {
        populated(&self.search_term)
    }

    /// True when anything deviates from the default view.
    pub fn has_active_filters(&self) -> bool {
        self.industry_filter().is_some()
            || self.location_filter().is_some()
            || self.specialty_filter().is_some()
            || self.search_filter().is_some()
            || self.sort_by != SortMode::Recent
    }

    /// The default view: no facets, newest first.
    pub fn cleared() -> Self {
        Self::default()
    }
}

fn populated(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
