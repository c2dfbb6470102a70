//! Option lists for the directory filter form.

use serde::Serialize;

use crate::domain::profile::{Industry, Profile};

use super::locale_cmp;

/// Values a visitor can pick from when narrowing the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryFacets {
    /// Every industry, in display order, whether or not a profile uses it.
    pub industries: Vec<Industry>,
    /// Distinct service areas across the given profiles.
    pub locations: Vec<String>,
    /// Distinct specialties across the given profiles.
    pub specialties: Vec<String>,
}

impl DirectoryFacets {
    pub fn collect<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let mut locations: Vec<String> = Vec::new();
        let mut specialties: Vec<String> = Vec::new();

        for profile in profiles {
            push_distinct(&mut locations, profile.service_areas());
            push_distinct(&mut specialties, profile.specialties());
        }

        locations.sort_by(|a, b| locale_cmp(a, b));
        specialties.sort_by(|a, b| locale_cmp(a, b));

        Self {
            industries: Industry::ALL.to_vec(),
            locations,
            specialties,
        }
    }
}

fn push_distinct(target: &mut Vec<String>, values: &[String]) {
    for value in values {
        if !target.contains(value) {
            target.push(value.clone());
        }
    }
}
