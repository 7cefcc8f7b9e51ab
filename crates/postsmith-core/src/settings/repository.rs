//! Settings repository trait.
//!
//! Defines how committed settings are loaded and replaced.

use super::model::Settings;

/// An abstract repository for the committed settings.
///
/// Persistence is best-effort: `load` never fails (it falls back to
/// `Settings::default()`), and `commit` never rejects a write. Validation
/// happens upstream in the draft controller.
pub trait SettingsRepository: Send + Sync {
    /// Returns the last committed settings, or the defaults if none are stored
    /// or the stored value cannot be parsed.
    fn load(&self) -> Settings;

    /// Replaces the committed settings.
    fn commit(&self, settings: &Settings);
}
