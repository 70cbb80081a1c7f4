//! Project path configuration.
//!
//! The scaffolder works against a handful of well-known locations in the
//! host project. Each can be overridden through a `[paths]` table in
//! `modkit.toml` at the project root; anything unset keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ScaffoldError;

/// Config file read from the host project root
pub const CONFIG_FILE: &str = "modkit.toml";

/// Locations the scaffolder reads and writes, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub modules_dir: PathBuf,
    pub migrations_dir: PathBuf,
    pub seeders_dir: PathBuf,
    pub registry_file: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            modules_dir: PathBuf::from("src/modules"),
            migrations_dir: PathBuf::from("migrations"),
            seeders_dir: PathBuf::from("database/seeders"),
            registry_file: PathBuf::from("src/bootstrap/providers.rs"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    paths: PathsSection,
}

#[derive(Debug, Default, Deserialize)]
struct PathsSection {
    modules_dir: Option<PathBuf>,
    migrations_dir: Option<PathBuf>,
    seeders_dir: Option<PathBuf>,
    registry_file: Option<PathBuf>,
}

impl ProjectPaths {
    /// Load path overrides from `modkit.toml`, falling back to the defaults
    /// when the file or individual keys are absent.
    pub fn load(project_root: &Path) -> Result<Self, ScaffoldError> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let parsed: ConfigFile = toml::from_str(&content)?;
        let defaults = Self::default();

        Ok(Self {
            modules_dir: parsed.paths.modules_dir.unwrap_or(defaults.modules_dir),
            migrations_dir: parsed
                .paths
                .migrations_dir
                .unwrap_or(defaults.migrations_dir),
            seeders_dir: parsed.paths.seeders_dir.unwrap_or(defaults.seeders_dir),
            registry_file: parsed.paths.registry_file.unwrap_or(defaults.registry_file),
        })
    }
}
