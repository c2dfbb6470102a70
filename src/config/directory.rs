//! Directory data settings.

use serde::Deserialize;
use std::path::PathBuf;

/// Seed data for the `memory` backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryConfig {
    /// YAML file with demo accounts, profiles and projects
    pub seed_path: Option<PathBuf>,
}
