//! Generation domain models.

use serde::{Deserialize, Serialize};

/// A post produced by one successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    /// Post text; the prompt asks for at most 140 characters but this is not
    /// enforced locally
    pub text: String,
    /// The source URL the post was generated from
    pub source_url: String,
}

/// Why a generation run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationFailure {
    /// The committed settings had no sources; no request was sent.
    NoSources,
    /// The generator answered without usable text.
    EmptyResponse,
    /// The request itself failed. Details only go to the log.
    Transport,
}

impl GenerationFailure {
    /// The message shown to the end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoSources => "No sources configured. Add at least one source URL first.",
            Self::EmptyResponse => "The generator returned an empty response. Try again.",
            Self::Transport => {
                "Generation failed. Check your API key and network connection, then try again."
            }
        }
    }
}

impl std::fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Observable state of the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationOutcome {
    #[default]
    Idle,
    InProgress,
    Success(GeneratedPost),
    Failure(GenerationFailure),
}

impl GenerationOutcome {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub fn post(&self) -> Option<&GeneratedPost> {
        match self {
            Self::Success(post) => Some(post),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<GenerationFailure> {
        match self {
            Self::Failure(reason) => Some(*reason),
            _ => None,
        }
    }
}
