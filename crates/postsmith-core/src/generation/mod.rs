//! Generation domain: outcome model, generator seam, and prompt builder.
//!
//! The pipeline that drives these lives in `postsmith-application`.

pub mod generator;
pub mod model;
pub mod prompt;

pub use generator::{ContentGenerator, GeneratorError};
pub use model::{GeneratedPost, GenerationFailure, GenerationOutcome};
pub use prompt::{GENERATION_MODEL, MAX_POST_CHARS, build_prompt};
