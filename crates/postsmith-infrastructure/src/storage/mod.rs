//! Storage layer: the JSON file store and secret.json access.

mod json_file_store;
mod secret_storage;

pub use json_file_store::JsonFileStore;
pub use secret_storage::{GEMINI_API_KEY_ENV, SecretStorage, SecretStorageError};
