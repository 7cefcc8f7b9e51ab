//! Generative API clients.

pub mod gemini_api_agent;

pub use gemini_api_agent::GeminiApiAgent;
