use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::lib::error::ConfigError;

pub const CONFIG_FILE: &str = "config.json";

/// Where instance, metric and cost data come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local JSON fixtures
    #[default]
    Mock,
    /// Live cloud provider APIs
    Real,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mock => "mock",
            Mode::Real => "real",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings persisted between runs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub mode: Mode,
}

impl AppConfig {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Platform-specific config file location
    ///
    /// * **macOS**: `~/Library/Application Support/com.frost8ytes.rightsizer/config.json`
    /// * **Linux**: `~/.config/rightsizer/config.json`
    /// * **Windows**: `C:\Users\<User>\AppData\Roaming\frost8ytes\rightsizer\config\config.json`
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "frost8ytes", "rightsizer").ok_or_else(|| {
            ConfigError::MissingRequired("no home directory for configuration".to_string())
        })?;
        Ok(proj_dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the config, writing the default first if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "No config at {}, creating default (mode: {})",
                path.display(),
                Mode::default()
            );
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ConfigError::InvalidValue(format!("{}: {}", path.display(), e)))?;

        debug!("Loaded config from {} (mode: {})", path.display(), config.mode);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                ConfigError::FileError(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }
}
