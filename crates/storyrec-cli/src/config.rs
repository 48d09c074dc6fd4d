//! Config file loading.
//!
//! Layering: built-in defaults, then the TOML config file, then CLI flags
//! (applied by the command handlers).

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use storyrec_engine::RecommenderConfig;
use storyrec_fetch::ArchiveConfig;

/// On-disk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Archive endpoint settings
    #[serde(default)]
    pub archive: ArchiveSection,

    /// Engine settings
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

/// `[archive]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ArchiveSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ArchiveSection {
    /// Convert to the fetch crate's client config.
    pub fn to_archive_config(&self) -> ArchiveConfig {
        ArchiveConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_base_url() -> String {
    "https://archiveofourown.org".to_string()
}
fn default_user_agent() -> String {
    "storyrec/0.1 (+https://github.com/storyrec/storyrec)".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

/// Load configuration.
///
/// An explicit `--config` path must exist; otherwise the default path is
/// used when present and built-in defaults when not.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(FileConfig::default()),
        },
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "storyrec")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
