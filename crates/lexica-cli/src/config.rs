//! CLI configuration, loaded from an optional TOML file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings for the CLI, all optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Database file path. Relative paths resolve against the working
    /// directory.
    pub database_path: PathBuf,
    /// Substring a file name must contain to be picked up by
    /// `add_concepts_dir`.
    pub concept_file_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("concepts.db"),
            concept_file_filter: "concepts".to_string(),
        }
    }
}

impl CliConfig {
    /// Load from `path` if given, otherwise from the default location.
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = match path.or_else(default_config_path) {
            Some(p) => p,
            None => return Ok(Self::default()),
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lexica").join("config.toml"))
}
