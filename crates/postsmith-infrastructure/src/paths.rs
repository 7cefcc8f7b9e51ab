//! Unified path management for postsmith files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/postsmith/         # Home directory (POSTSMITH_HOME overrides)
//! ├── secret.json              # API keys
//! ├── store/                   # Key/value store (one JSON file per key)
//! │   ├── settings.json
//! │   └── history.json
//! └── logs/                    # Diagnostic logs
//!     └── postsmith.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "POSTSMITH_HOME";

const APP_DIR: &str = "postsmith";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved locations of every file postsmith reads or writes.
#[derive(Debug, Clone)]
pub struct PostsmithPaths {
    home: PathBuf,
}

impl PostsmithPaths {
    /// Resolves the home directory.
    ///
    /// Precedence: `home` argument, then `POSTSMITH_HOME`, then the platform
    /// config directory (e.g. `~/.config/postsmith`).
    pub fn new(home: Option<PathBuf>) -> Result<Self, PathError> {
        if let Some(home) = home {
            return Ok(Self { home });
        }

        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                home: PathBuf::from(home),
            });
        }

        dirs::config_dir()
            .map(|dir| Self {
                home: dir.join(APP_DIR),
            })
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory of the JSON key/value store.
    pub fn store_dir(&self) -> PathBuf {
        self.home.join("store")
    }

    /// Path to secret.json.
    ///
    /// # Security Note
    ///
    /// The file should only be readable by the user (600).
    pub fn secret_file(&self) -> PathBuf {
        self.home.join("secret.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.home.join("logs")
    }
}
