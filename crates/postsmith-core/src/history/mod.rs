//! History ledger of generated posts.

pub mod ledger;
pub mod model;

pub use ledger::{HISTORY_KEY, HistoryLedger};
pub use model::{HISTORY_LIMIT, HistoryEntry};
