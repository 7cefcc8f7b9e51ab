//! One interactive postsmith session.
//!
//! Ties the draft controller, the history ledger and the generation pipeline
//! together. Generation always reads the committed settings; pending draft
//! edits have no effect until they are committed.

use std::path::Path;
use std::sync::Arc;

use postsmith_core::error::Result;
use postsmith_core::generation::{ContentGenerator, GenerationOutcome};
use postsmith_core::history::{HistoryEntry, HistoryLedger};
use postsmith_core::settings::{DraftController, SettingsRepository};
use postsmith_core::store::KeyValueStore;
use postsmith_infrastructure::StoreSettingsRepository;

use crate::export::ExportedConfig;
use crate::pipeline::GenerationPipeline;

pub struct PostsmithSession {
    draft: DraftController,
    pipeline: GenerationPipeline,
}

impl PostsmithSession {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepository>,
        store: Arc<dyn KeyValueStore>,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            draft: DraftController::new(settings_repository),
            pipeline: GenerationPipeline::new(generator, HistoryLedger::load(store)),
        }
    }

    /// Keeps settings and history in the same store under separate keys.
    pub fn from_store(store: Arc<dyn KeyValueStore>, generator: Arc<dyn ContentGenerator>) -> Self {
        let repository = Arc::new(StoreSettingsRepository::new(store.clone()));
        Self::new(repository, store, generator)
    }

    pub fn draft(&self) -> &DraftController {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftController {
        &mut self.draft
    }

    /// Generates a post from the committed settings.
    pub async fn generate(&mut self) -> &GenerationOutcome {
        let settings = self.draft.committed().clone();
        self.pipeline.generate(&settings).await
    }

    pub fn outcome(&self) -> &GenerationOutcome {
        self.pipeline.outcome()
    }

    /// Past generations, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.pipeline.ledger().list()
    }

    pub fn clear_history(&mut self) {
        self.pipeline.ledger_mut().clear();
    }

    /// Exports the committed persona and sources to `path`.
    pub fn export_config(&self, path: &Path) -> Result<()> {
        ExportedConfig::from(self.draft.committed()).write_to(path)
    }
}
