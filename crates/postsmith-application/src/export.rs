//! Configuration export for external automation.
//!
//! Produces the `{ persona, sources }` JSON file read by the helper script and
//! workflow templates. Only committed settings are exported.

use postsmith_core::error::Result;
use postsmith_core::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name of the exported configuration.
pub const DEFAULT_EXPORT_FILE: &str = "postsmith-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedConfig {
    pub persona: String,
    pub sources: Vec<String>,
}

impl From<&Settings> for ExportedConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            persona: settings.persona.clone(),
            sources: settings.sources.clone(),
        }
    }
}

impl ExportedConfig {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the formatted JSON to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_pretty_json()? + "\n")?;
        tracing::info!("[Export] Wrote {}", path.display());
        Ok(())
    }
}
