//! Persistent user settings for git-upload.
//!
//! Settings live in `config.json` inside the directory from
//! [`get_config_directory`](crate::core::dirs::get_config_directory).
//! A missing file means defaults; a broken one is reported and replaced by defaults
//! for the current run rather than stopping the workflow.

use crate::core::dirs::get_config_file;
use crate::core::error::{GitUploadError, Result};
use crate::core::git::StageMode;
use crate::core::table::{TableStyle, DEFAULT_MAX_WIDTH, DEFAULT_TITLE};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UpdateCheckConfig {
    pub enabled: bool,
    pub repo_owner: String,
    pub repo_name: String,
    /// Minimum time between two release lookups
    pub interval_hours: i64,
    pub last_check: Option<DateTime<Utc>>,
}

impl Default for UpdateCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            repo_owner: "git-upload".to_string(),
            repo_name: "git-upload".to_string(),
            interval_hours: 24,
            last_check: None,
        }
    }
}

impl UpdateCheckConfig {
    /// Whether a release lookup is due at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return false;
        }
        match self.last_check {
            Some(last) => now - last >= Duration::hours(self.interval_hours.max(0)),
            None => true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub title: String,
    pub max_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    pub update_check: UpdateCheckConfig,
    pub table: TableConfig,
    pub default_stage_mode: StageMode,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            update_check: UpdateCheckConfig::default(),
            table: TableConfig::default(),
            default_stage_mode: StageMode::Changed,
        }
    }
}

impl UploadConfig {
    /// Load from the user config directory, falling back to defaults
    pub fn load_or_default() -> Self {
        let path = match get_config_file() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("No config directory, using defaults: {e}");
                return Self::default();
            }
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config file: {e}");
                Self::default()
            }
        }
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GitUploadError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| GitUploadError::config_parse_failed(path, e))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn record_update_check(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.update_check.last_check = Some(now);
        self.save()
    }

    pub fn table_style(&self) -> TableStyle {
        TableStyle::default()
            .with_title(self.table.title.clone())
            .with_max_width(self.table.max_width)
    }
}
