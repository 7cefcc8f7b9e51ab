pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod settings;
pub mod store;

// Re-export common error type
pub use error::PostsmithError;
