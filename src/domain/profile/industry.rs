//! Fixed set of industries a professional can list under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry category of a profile.
///
/// The display name doubles as the facet value: directory filters compare
/// against [`Industry::name`] exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "Construction")]
    Construction,
    #[serde(rename = "Landscaping")]
    Landscaping,
    #[serde(rename = "Cleaning")]
    Cleaning,
    #[serde(rename = "Plumbing")]
    Plumbing,
    #[serde(rename = "Electrical")]
    Electrical,
    #[serde(rename = "Interior Design")]
    InteriorDesign,
}

impl Industry {
    /// Every industry, in display order.
    pub const ALL: [Industry; 6] = [
        Industry::Construction,
        Industry::Landscaping,
        Industry::Cleaning,
        Industry::Plumbing,
        Industry::Electrical,
        Industry::InteriorDesign,
    ];

    /// Display name, also used as the stored and filtered value.
    pub fn name(&self) -> &'static str {
        match self {
            Industry::Construction => "Construction",
            Industry::Landscaping => "Landscaping",
            Industry::Cleaning => "Cleaning",
            Industry::Plumbing => "Plumbing",
            Industry::Electrical => "Electrical",
            Industry::InteriorDesign => "Interior Design",
        }
    }

    /// Stable identifier for UI keys.
    pub fn key(&self) -> &'static str {
        match self {
            Industry::Construction => "construction",
            Industry::Landscaping => "landscaping",
            Industry::Cleaning => "cleaning",
            Industry::Plumbing => "plumbing",
            Industry::Electrical => "electrical",
            Industry::InteriorDesign => "interior-design",
        }
    }

    /// Looks up an industry by exact display name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.name() == name)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_exact_and_case_sensitive() {
        assert_eq!(Industry::from_name("Plumbing"), Some(Industry::Plumbing));
        assert_eq!(Industry::from_name("plumbing"), None);
        assert_eq!(Industry::from_name("Interior Design"), Some(Industry::InteriorDesign));
        assert_eq!(Industry::from_name("Roofing"), None);
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Industry::InteriorDesign).unwrap();
        assert_eq!(json, "\"Interior Design\"");
    }

    #[test]
    fn all_names_round_trip_through_lookup() {
        for industry in Industry::ALL {
            assert_eq!(Industry::from_name(industry.name()), Some(industry));
        }
    }
}
