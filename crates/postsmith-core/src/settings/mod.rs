//! Settings domain: model, repository contract, and the draft controller.

pub mod draft;
pub mod model;
pub mod repository;

pub use draft::{DraftController, SettingsEdit, is_dirty};
pub use model::{MAX_POSTS_PER_DAY, MIN_POSTS_PER_DAY, Settings};
pub use repository::SettingsRepository;
