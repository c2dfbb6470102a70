//! Directory query engine.
//!
//! Pure and synchronous: borrows the candidate profiles, never mutates them,
//! and always produces a result.

use crate::domain::profile::Profile;

use super::{locale_cmp, FilterSpec, SortMode};

/// Filters and orders profiles according to `spec`.
///
/// Populated facets combine with AND:
///
/// - `industry`: exact, case-sensitive match on the industry display name;
///   a profile without an industry never matches
/// - `location`: some service area contains the filter text (case-sensitive)
/// - `specialty`: some specialty contains the filter text (case-sensitive)
///
/// `search_term` does not narrow the results.
///
/// Sorting is stable: `alphabetical` by display name, `recent` by creation
/// time descending, `rating` keeps the filtered input order.
pub fn search<'a>(profiles: &'a [Profile], spec: &FilterSpec) -> Vec<&'a Profile> {
    let mut results: Vec<&Profile> = profiles.iter().filter(|p| matches(p, spec)).collect();

    match spec.sort_by {
        SortMode::Alphabetical => {
            results.sort_by(|a, b| locale_cmp(a.full_name(), b.full_name()));
        }
        SortMode::Recent => {
            results.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        }
        SortMode::Rating => {}
    }

    results
}

/// True if the profile satisfies every populated facet of `spec`.
pub fn matches(profile: &Profile, spec: &FilterSpec) -> bool {
    if let Some(industry) = spec.industry_filter() {
        if profile.industry().map(|i| i.name()) != Some(industry) {
            return false;
        }
    }
    if let Some(location) = spec.location_filter() {
        if !any_contains(profile.service_areas(), location) {
            return false;
        }
    }
    if let Some(specialty) = spec.specialty_filter() {
        if !any_contains(profile.specialties(), specialty) {
            return false;
        }
    }
    true
}

fn any_contains(entries: &[String], needle: &str) -> bool {
    entries.iter().any(|entry| entry.contains(needle))
}
