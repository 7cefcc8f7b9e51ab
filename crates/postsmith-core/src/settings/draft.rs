//! Draft controller for settings.
//!
//! Holds an editable working copy next to the committed settings. The draft
//! is Dirty whenever it differs from the committed copy; this is recomputed
//! by value comparison on every read, never tracked as a flag.

use std::sync::Arc;

use super::model::{
    Settings, clamp_posts_per_day, is_valid_schedule_time, normalize_schedule_times,
    normalize_sources,
};
use super::repository::SettingsRepository;

/// A whole-field replacement applied to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEdit {
    Persona(String),
    Sources(Vec<String>),
    ScheduleTimes(Vec<String>),
    PostsPerDay(u32),
}

/// Returns true when `draft` differs from `committed`.
pub fn is_dirty(draft: &Settings, committed: &Settings) -> bool {
    draft != committed
}

/// Working copy of the settings with commit/discard semantics.
///
/// All add/remove operations silently ignore requests whose precondition
/// fails (empty value, duplicate, out-of-range index).
pub struct DraftController {
    repository: Arc<dyn SettingsRepository>,
    committed: Settings,
    draft: Settings,
}

impl DraftController {
    /// Loads the committed settings and starts with a clean draft.
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        let committed = repository.load();
        Self {
            repository,
            draft: committed.clone(),
            committed,
        }
    }

    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    pub fn committed(&self) -> &Settings {
        &self.committed
    }

    pub fn is_dirty(&self) -> bool {
        is_dirty(&self.draft, &self.committed)
    }

    /// Replaces one field of the draft. Lists are normalized and the quota
    /// clamped so the settings invariants keep holding.
    pub fn edit(&mut self, edit: SettingsEdit) {
        match edit {
            SettingsEdit::Persona(persona) => self.draft.persona = persona,
            SettingsEdit::Sources(sources) => self.draft.sources = normalize_sources(sources),
            SettingsEdit::ScheduleTimes(times) => {
                self.draft.schedule_times = normalize_schedule_times(times)
            }
            SettingsEdit::PostsPerDay(n) => self.draft.posts_per_day = clamp_posts_per_day(n),
        }
    }

    /// Appends a source URL. Returns whether the draft changed; the caller
    /// clears its pending input only in that case.
    pub fn add_source(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() || self.draft.sources.iter().any(|s| s == url) {
            return false;
        }
        self.draft.sources.push(url.to_string());
        true
    }

    pub fn remove_source(&mut self, index: usize) -> bool {
        if index >= self.draft.sources.len() {
            return false;
        }
        self.draft.sources.remove(index);
        true
    }

    /// Inserts a "HH:MM" time and keeps the list sorted. Zero-padded 24h
    /// strings sort lexicographically in chronological order.
    pub fn add_schedule_time(&mut self, hhmm: &str) -> bool {
        let hhmm = hhmm.trim();
        if !is_valid_schedule_time(hhmm) || self.draft.schedule_times.iter().any(|t| t == hhmm) {
            return false;
        }
        self.draft.schedule_times.push(hhmm.to_string());
        self.draft.schedule_times.sort();
        true
    }

    pub fn remove_schedule_time(&mut self, index: usize) -> bool {
        if index >= self.draft.schedule_times.len() {
            return false;
        }
        self.draft.schedule_times.remove(index);
        true
    }

    /// Persists the draft and makes it the committed copy. No-op while clean.
    pub fn commit(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }
        self.repository.commit(&self.draft);
        self.committed = self.draft.clone();
        tracing::info!("[Draft] Settings committed");
        true
    }

    /// Throws away pending edits. No-op while clean.
    pub fn discard(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }
        self.draft = self.committed.clone();
        tracing::debug!("[Draft] Pending edits discarded");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mock SettingsRepository recording every commit
    struct MockSettingsRepository {
        stored: Mutex<Settings>,
        commits: Mutex<usize>,
    }

    impl MockSettingsRepository {
        fn new(initial: Settings) -> Self {
            Self {
                stored: Mutex::new(initial),
                commits: Mutex::new(0),
            }
        }

        fn commit_count(&self) -> usize {
            *self.commits.lock().unwrap()
        }

        fn stored(&self) -> Settings {
            self.stored.lock().unwrap().clone()
        }
    }

    impl SettingsRepository for MockSettingsRepository {
        fn load(&self) -> Settings {
            self.stored.lock().unwrap().clone()
        }

        fn commit(&self, settings: &Settings) {
            *self.stored.lock().unwrap() = settings.clone();
            *self.commits.lock().unwrap() += 1;
        }
    }

    fn controller() -> (DraftController, Arc<MockSettingsRepository>) {
        let repo = Arc::new(MockSettingsRepository::new(Settings::default()));
        (DraftController::new(repo.clone()), repo)
    }

    #[test]
    fn test_starts_clean() {
        let (draft, _) = controller();
        assert!(!draft.is_dirty());
        assert_eq!(draft.draft(), draft.committed());
    }

    #[test]
    fn test_add_source_preserves_order_and_uniqueness() {
        let (mut draft, _) = controller();
        assert!(draft.add_source("https://a.example"));
        assert!(draft.add_source("https://b.example"));
        assert!(!draft.add_source("https://a.example"));
        assert!(!draft.add_source("   "));
        assert!(draft.add_source("https://c.example"));
        assert!(draft.remove_source(1));
        assert!(!draft.remove_source(5));

        assert_eq!(
            draft.draft().sources,
            vec!["https://a.example", "https://c.example"]
        );
    }

    #[test]
    fn test_add_source_is_idempotent() {
        let (mut once, _) = controller();
        once.add_source("https://a.example");

        let (mut twice, _) = controller();
        twice.add_source("https://a.example");
        twice.add_source("https://a.example");

        assert_eq!(once.draft().sources, twice.draft().sources);
    }

    #[test]
    fn test_schedule_times_stay_sorted_and_unique() {
        let (mut draft, _) = controller();
        draft.edit(SettingsEdit::ScheduleTimes(Vec::new()));
        for t in ["18:30", "07:05", "12:00", "07:05", "", "7:00", "23:59", "00:00"] {
            draft.add_schedule_time(t);
        }

        assert_eq!(
            draft.draft().schedule_times,
            vec!["00:00", "07:05", "12:00", "18:30", "23:59"]
        );

        assert!(draft.remove_schedule_time(0));
        assert!(!draft.remove_schedule_time(10));
        assert_eq!(draft.draft().schedule_times[0], "07:05");
    }

    #[test]
    fn test_edit_marks_dirty_only_on_change() {
        let (mut draft, _) = controller();
        let persona = draft.committed().persona.clone();

        draft.edit(SettingsEdit::Persona(persona));
        assert!(!draft.is_dirty());

        draft.edit(SettingsEdit::PostsPerDay(10));
        assert!(draft.is_dirty());

        // Editing back to the committed value makes it clean again
        draft.edit(SettingsEdit::PostsPerDay(3));
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_edit_normalizes_fields() {
        let (mut draft, _) = controller();
        draft.edit(SettingsEdit::PostsPerDay(99));
        assert_eq!(draft.draft().posts_per_day, 50);

        draft.edit(SettingsEdit::Sources(vec![
            "https://a.example".to_string(),
            "https://a.example".to_string(),
        ]));
        assert_eq!(draft.draft().sources, vec!["https://a.example"]);
    }

    #[test]
    fn test_commit_persists_and_cleans() {
        let (mut draft, repo) = controller();
        draft.add_source("https://a.example");
        assert!(draft.is_dirty());

        assert!(draft.commit());
        assert!(!draft.is_dirty());
        assert_eq!(repo.commit_count(), 1);
        assert_eq!(repo.stored().sources, vec!["https://a.example"]);
        assert_eq!(draft.committed().sources, vec!["https://a.example"]);
    }

    #[test]
    fn test_commit_while_clean_is_noop() {
        let (mut draft, repo) = controller();
        assert!(!draft.commit());
        assert_eq!(repo.commit_count(), 0);
    }

    #[test]
    fn test_discard_restores_committed() {
        let (mut draft, repo) = controller();
        draft.add_source("https://a.example");
        draft.edit(SettingsEdit::Persona("new voice".to_string()));

        assert!(draft.discard());
        assert!(!draft.is_dirty());
        assert_eq!(draft.draft(), &Settings::default());
        assert_eq!(repo.commit_count(), 0);
    }

    #[test]
    fn test_commit_then_discard_keeps_committed() {
        let (mut draft, repo) = controller();
        draft.add_source("https://a.example");
        draft.commit();
        let committed = draft.committed().clone();

        assert!(!draft.discard());
        assert_eq!(draft.committed(), &committed);
        assert_eq!(draft.draft(), &committed);
        assert_eq!(repo.stored(), committed);
    }

    #[test]
    fn test_loads_committed_from_repository() {
        let stored = Settings {
            persona: "stored".to_string(),
            sources: vec!["https://feed.example".to_string()],
            schedule_times: Vec::new(),
            posts_per_day: 7,
        };
        let repo = Arc::new(MockSettingsRepository::new(stored.clone()));
        let draft = DraftController::new(repo);
        assert_eq!(draft.committed(), &stored);
        assert_eq!(draft.draft(), &stored);
    }

    #[test]
    fn test_random_edit_sequences_keep_list_invariants() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        const URLS: &[&str] = &[
            "https://a.example",
            "https://b.example",
            "https://c.example",
            "https://d.example",
            "  https://a.example  ",
            "",
        ];
        const TIMES: &[&str] = &["07:30", "09:00", "12:00", "18:00", "23:59", "7:30", "24:00", ""];

        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (mut draft, _) = controller();
            let mut expected_sources: Vec<String> = Vec::new();

            for _ in 0..200 {
                match rng.gen_range(0..6) {
                    0 => {
                        let url = URLS[rng.gen_range(0..URLS.len())];
                        let trimmed = url.trim();
                        let accepted = !trimmed.is_empty()
                            && !expected_sources.iter().any(|s| s == trimmed);
                        assert_eq!(draft.add_source(url), accepted);
                        if accepted {
                            expected_sources.push(trimmed.to_string());
                        }
                    }
                    1 => {
                        let index = rng.gen_range(0..expected_sources.len() + 2);
                        let valid = index < expected_sources.len();
                        assert_eq!(draft.remove_source(index), valid);
                        if valid {
                            expected_sources.remove(index);
                        }
                    }
                    2 => {
                        draft.add_schedule_time(TIMES[rng.gen_range(0..TIMES.len())]);
                    }
                    3 => {
                        let len = draft.draft().schedule_times.len();
                        draft.remove_schedule_time(rng.gen_range(0..len + 2));
                    }
                    4 => {
                        draft.commit();
                    }
                    _ => {
                        draft.discard();
                        expected_sources = draft.draft().sources.clone();
                    }
                }

                let current = draft.draft();
                assert_eq!(current.sources, expected_sources, "seed {seed}");

                let times = &current.schedule_times;
                assert!(times.iter().all(|t| is_valid_schedule_time(t)), "seed {seed}");
                assert!(times.windows(2).all(|w| w[0] < w[1]), "seed {seed}");

                assert_eq!(draft.is_dirty(), draft.draft() != draft.committed());
            }
        }
    }
}
