//! Secret configuration file storage.
//!
//! Loads API keys from `secret.json` in the postsmith home directory.

use postsmith_core::config::{GeminiConfig, SecretConfig};
use postsmith_core::generation::GENERATION_MODEL;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the Gemini key from secret.json.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Errors that can occur during secret storage operations.
#[derive(Debug)]
pub enum SecretStorageError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for SecretStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretStorageError::NotFound(path) => {
                write!(f, "Configuration file not found at: {}", path.display())
            }
            SecretStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            SecretStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for SecretStorageError {}

impl From<std::io::Error> for SecretStorageError {
    fn from(e: std::io::Error) -> Self {
        SecretStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for SecretStorageError {
    fn from(e: serde_json::Error) -> Self {
        SecretStorageError::ParseError(e)
    }
}

/// Storage for secret.json.
///
/// Does NOT:
/// - Validate API keys
/// - Handle encryption (plaintext JSON storage)
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads and parses secret.json.
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        if !self.path.exists() {
            return Err(SecretStorageError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Resolves the Gemini API key: the environment variable first, then the
    /// file. A missing or broken file only yields `None`.
    pub fn resolve_gemini_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(GEMINI_API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                return Some(key.to_string());
            }
        }

        match self.load() {
            Ok(config) => config.gemini_api_key().map(str::to_string),
            Err(SecretStorageError::NotFound(_)) => None,
            Err(e) => {
                tracing::warn!("[SecretStorage] Could not read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Writes a template secret.json if none exists and returns its path.
    ///
    /// On Unix the file is restricted to user read/write (600).
    pub fn ensure_template(&self) -> Result<PathBuf, SecretStorageError> {
        if self.path.exists() {
            return Ok(self.path.clone());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let template = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(GENERATION_MODEL.to_string()),
            }),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&template)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        tracing::info!("[SecretStorage] Created template at {}", self.path.display());
        Ok(self.path.clone())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
