pub mod logging;
pub mod paths;
pub mod settings_repository;
pub mod storage;

pub use crate::paths::PostsmithPaths;
pub use crate::settings_repository::{SETTINGS_KEY, StoreSettingsRepository};
pub use crate::storage::{JsonFileStore, SecretStorage};
