//! Settings domain model.
//!
//! The committed configuration: who the posts sound like (persona), where
//! their content comes from (sources), and two automation memo fields
//! (schedule times and a daily quota) that are stored but never acted on.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Lowest accepted posts-per-day quota.
pub const MIN_POSTS_PER_DAY: u32 = 1;
/// Highest accepted posts-per-day quota.
pub const MAX_POSTS_PER_DAY: u32 = 50;

const DEFAULT_PERSONA: &str = "You are a friendly tech curator who shares interesting finds \
with a curious, upbeat tone. Write casually, as if recommending something to a friend.";

static SCHEDULE_TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid regex"));

/// User configuration for post generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Free-text instruction prefixed to every prompt
    pub persona: String,
    /// Candidate source URLs, unique, in insertion order
    pub sources: Vec<String>,
    /// Zero-padded 24h "HH:MM" strings, unique, sorted ascending
    pub schedule_times: Vec<String>,
    /// Daily quota in `[MIN_POSTS_PER_DAY, MAX_POSTS_PER_DAY]`
    pub posts_per_day: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            sources: Vec::new(),
            schedule_times: vec![
                "09:00".to_string(),
                "12:00".to_string(),
                "18:00".to_string(),
            ],
            posts_per_day: 3,
        }
    }
}

impl Settings {
    /// Returns a copy with the list and quota invariants restored.
    ///
    /// Used when settings arrive from outside the draft controller (a file
    /// edited by hand, a whole-list replacement).
    pub fn normalized(mut self) -> Self {
        self.sources = normalize_sources(self.sources);
        self.schedule_times = normalize_schedule_times(self.schedule_times);
        self.posts_per_day = clamp_posts_per_day(self.posts_per_day);
        self
    }
}

/// Whether `value` is a zero-padded 24-hour "HH:MM" time.
pub fn is_valid_schedule_time(value: &str) -> bool {
    SCHEDULE_TIME_PATTERN.is_match(value)
}

/// Trims entries, drops empty ones and later duplicates.
pub fn normalize_sources(sources: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.trim();
        if !source.is_empty() && !result.iter().any(|s| s == source) {
            result.push(source.to_string());
        }
    }
    result
}

/// Drops malformed entries and duplicates, then sorts ascending.
pub fn normalize_schedule_times(times: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = times
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| is_valid_schedule_time(t))
        .collect();
    result.sort();
    result.dedup();
    result
}

pub fn clamp_posts_per_day(value: u32) -> u32 {
    value.clamp(MIN_POSTS_PER_DAY, MAX_POSTS_PER_DAY)
}
