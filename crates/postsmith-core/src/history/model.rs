//! History entry model.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::generation::GeneratedPost;

/// Maximum number of entries kept in the ledger.
pub const HISTORY_LIMIT: usize = 50;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A generated post together with the local time it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub text: String,
    pub source_url: String,
    /// Human-readable local creation time
    pub timestamp: String,
}

impl HistoryEntry {
    /// Stamps `post` with the current local time.
    pub fn now(post: GeneratedPost) -> Self {
        Self::at(post, Local::now())
    }

    pub fn at(post: GeneratedPost, created_at: DateTime<Local>) -> Self {
        Self {
            text: post.text,
            source_url: post.source_url,
            timestamp: created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn post(&self) -> GeneratedPost {
        GeneratedPost {
            text: self.text.clone(),
            source_url: self.source_url.clone(),
        }
    }
}
