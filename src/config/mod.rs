use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://tranquility.backend.ams.ayata.com.np/";

/// Page sizes offered by the timesheet table.
pub const PAGE_SIZE_CHOICES: [usize; 5] = [5, 10, 20, 50, 100];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_sweep_secs")]
    pub reminder_sweep_secs: u64,
    #[serde(default = "default_keep_previous")]
    pub keep_previous_data: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_page_size() -> usize {
    10
}
fn default_fetch_timeout() -> u64 {
    30
}
fn default_export_dir() -> String {
    Config::config_dir()
        .join("exports")
        .to_string_lossy()
        .to_string()
}
fn default_sweep_secs() -> u64 {
    600
}
fn default_keep_previous() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            fetch_timeout_secs: default_fetch_timeout(),
            export_dir: default_export_dir(),
            reminder_sweep_secs: default_sweep_secs(),
            keep_previous_data: default_keep_previous(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rstaffdesk`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rstaffdesk")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstaffdesk.conf")
    }

    /// Return the full path of the stored session
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.yaml")
    }

    /// Export directory with a leading `~/` resolved against the home directory.
    pub fn export_path(&self) -> PathBuf {
        match (self.export_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.export_dir),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_sweep_secs.max(1))
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    /// Fields missing from the file take their default values.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be positive".into()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("api_base_url cannot be empty".into()));
        }
        Ok(())
    }

    /// Write the configuration as YAML, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
