//! Generation pipeline.
//!
//! Turns the committed settings into one generated post:
//! Idle → InProgress → Success | Failure. Running again from a terminal
//! state starts over at InProgress. The pipeline has no internal guard
//! against overlapping runs; `generate` takes `&mut self`, so callers cannot
//! start a second run while one is awaiting the generator.

use std::sync::Arc;

use postsmith_core::generation::{
    ContentGenerator, GENERATION_MODEL, GeneratedPost, GenerationFailure, GenerationOutcome,
    build_prompt,
};
use postsmith_core::history::{HistoryEntry, HistoryLedger};
use postsmith_core::settings::Settings;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one source uniformly at random. Each call is independent.
pub fn choose_source<'a, R: Rng + ?Sized>(sources: &'a [String], rng: &mut R) -> Option<&'a str> {
    sources.choose(rng).map(String::as_str)
}

pub struct GenerationPipeline {
    generator: Arc<dyn ContentGenerator>,
    ledger: HistoryLedger,
    outcome: GenerationOutcome,
}

impl GenerationPipeline {
    pub fn new(generator: Arc<dyn ContentGenerator>, ledger: HistoryLedger) -> Self {
        Self {
            generator,
            ledger,
            outcome: GenerationOutcome::Idle,
        }
    }

    /// Result of the most recent run (`Idle` before the first one).
    pub fn outcome(&self) -> &GenerationOutcome {
        &self.outcome
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut HistoryLedger {
        &mut self.ledger
    }

    /// Runs one generation against `settings`.
    ///
    /// Never returns while InProgress. Successful runs are prepended to the
    /// history ledger; failures leave it untouched. Generator errors are
    /// logged in full and reported only as [`GenerationFailure::Transport`].
    pub async fn generate(&mut self, settings: &Settings) -> &GenerationOutcome {
        let source_url = match choose_source(&settings.sources, &mut rand::thread_rng()) {
            Some(url) => url.to_string(),
            None => {
                tracing::info!("[Pipeline] Generation requested without sources");
                self.outcome = GenerationOutcome::Failure(GenerationFailure::NoSources);
                return &self.outcome;
            }
        };

        self.outcome = GenerationOutcome::InProgress;
        let prompt = build_prompt(&settings.persona, &source_url);
        tracing::info!("[Pipeline] Generating from {}", source_url);

        let result = self.generator.generate(GENERATION_MODEL, &prompt).await;

        self.outcome = match result {
            Ok(Some(text)) if !text.trim().is_empty() => {
                let post = GeneratedPost {
                    text: text.trim().to_string(),
                    source_url,
                };
                self.ledger.prepend(HistoryEntry::now(post.clone()));
                tracing::info!("[Pipeline] Generated {} chars", post.text.chars().count());
                GenerationOutcome::Success(post)
            }
            Ok(_) => {
                tracing::warn!("[Pipeline] Generator returned no text for {}", source_url);
                GenerationOutcome::Failure(GenerationFailure::EmptyResponse)
            }
            Err(e) => {
                tracing::error!("[Pipeline] Generation failed for {}: {}", source_url, e);
                GenerationOutcome::Failure(GenerationFailure::Transport)
            }
        };

        &self.outcome
    }
}
