//! Wiring of the production session.

use std::sync::Arc;

use postsmith_core::store::KeyValueStore;
use postsmith_infrastructure::{JsonFileStore, PostsmithPaths, SecretStorage};
use postsmith_interaction::GeminiApiAgent;

use crate::session::PostsmithSession;

/// Opens a session on the JSON store under `paths`, generating through the
/// Gemini API with the key from the environment or secret.json.
pub fn open_session(paths: &PostsmithPaths) -> PostsmithSession {
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(paths.store_dir()));
    let secrets = SecretStorage::with_path(paths.secret_file());
    let generator = Arc::new(GeminiApiAgent::from_secrets(&secrets));

    tracing::info!("[Bootstrap] Opening session at {}", paths.home().display());
    PostsmithSession::from_store(store, generator)
}
