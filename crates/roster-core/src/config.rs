//! Roster configuration
//!
//! Read from `roster.toml` in the working directory, or from an explicit
//! `--config` path. Every field has a default, so the file is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use crate::student::DEFAULT_HONORS_BONUS;

/// Config file looked up by [`RosterConfig::discover`]
pub const CONFIG_FILE: &str = "roster.toml";

/// Roster file used when neither `--file` nor `data_file` is set
pub const DEFAULT_DATA_FILE: &str = "students.txt";

/// Roster configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Bonus added to honors students' averages
    #[serde(default = "default_honors_bonus")]
    pub honors_bonus: f64,

    /// Default roster file (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
}

fn default_honors_bonus() -> f64 {
    DEFAULT_HONORS_BONUS
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            honors_bonus: default_honors_bonus(),
            data_file: None,
        }
    }
}

impl RosterConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RosterError::io_operation("read config", path.display(), e))?;
        let config: RosterConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `roster.toml` from `dir` if present, else defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!(path = %path.display(), "load_config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RosterError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.honors_bonus.is_finite() {
            bail_invalid!("honors_bonus", self.honors_bonus);
        }
        Ok(())
    }

    /// Roster file to use, preferring an explicit path
    pub fn data_file(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.data_file.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Empty roster using this configuration
    pub fn new_roster(&self) -> Roster {
        Roster::with_honors_bonus(self.honors_bonus)
    }
}
