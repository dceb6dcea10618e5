use crate::errors::{AppError, AppResult};
use crate::models::profile::UserProfile;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Static asset published by NYC Open Data with the historical opportunities.
pub const DEFAULT_CSV_SOURCE: &str = "NYC_Service__Volunteer_Opportunities__Historical_.csv";

/// How an event id is produced when the CSV row carries no `opportunity_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdFallback {
    /// A fresh random id on every load (ids are not stable across loads).
    #[default]
    Random,
    /// SHA-256 of title, start and organization (stable across loads).
    Hashed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_csv_source")]
    pub csv_source: String,
    #[serde(default)]
    pub id_fallback: IdFallback,
    /// Drop events whose end comes before their start.
    #[serde(default)]
    pub reject_reversed_ranges: bool,
    #[serde(default)]
    pub profile: UserProfile,
}

fn default_csv_source() -> String {
    DEFAULT_CSV_SOURCE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_source: default_csv_source(),
            id_fallback: IdFallback::default(),
            reject_reversed_ranges: false,
            profile: UserProfile::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rvolunteer")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rvolunteer")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rvolunteer.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
