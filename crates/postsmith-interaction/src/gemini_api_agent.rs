//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Calls the `generateContent` endpoint. The API key comes from the
//! `GEMINI_API_KEY` environment variable or secret.json.

use async_trait::async_trait;
use postsmith_core::generation::{ContentGenerator, GeneratorError};
use postsmith_infrastructure::SecretStorage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Generator that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiApiAgent {
    /// Creates an agent with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_optional_key(Some(api_key.into()))
    }

    /// Creates an agent from the environment / secret.json.
    ///
    /// Construction never fails: without a key every request fails with
    /// [`GeneratorError::MissingApiKey`], which the pipeline reports as a
    /// generic failure.
    pub fn from_secrets(secrets: &SecretStorage) -> Self {
        let api_key = secrets.resolve_gemini_api_key();
        if api_key.is_none() {
            tracing::warn!(
                "[GeminiApiAgent] No API key found (checked env and {})",
                secrets.path().display()
            );
        }
        Self::with_optional_key(api_key)
    }

    fn with_optional_key(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("[GeminiApiAgent] Falling back to default client: {}", e);
                Client::new()
            });

        Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL (e.g. for a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{model}:generateContent", self.base_url)
    }

    async fn send_request(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<Option<String>, GeneratorError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GeneratorError::MissingApiKey(
                "set GEMINI_API_KEY or fill in gemini.api_key in secret.json".into(),
            )
        })?;

        let response = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", api_key)])
            .json(body)
            .send()
            .await
            .map_err(|err| {
                // reqwest includes the URL (and therefore the key) in its message
                GeneratorError::Request(err.without_url().to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GeneratorError::Parse(err.without_url().to_string()))?;

        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl ContentGenerator for GeminiApiAgent {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, GeneratorError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        tracing::debug!("[GeminiApiAgent] Sending request to model {}", model);
        self.send_request(model, &request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Joined text of the first candidate's non-thought parts, if any carry text.
fn extract_text_response(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates?.into_iter().next()?.content?;
    let texts: Vec<String> = content
        .parts
        .into_iter()
        .filter(|part| !part.thought)
        .filter_map(|part| part.text)
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

fn map_http_error(status: StatusCode, body: String) -> GeneratorError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    GeneratorError::Http {
        status: status.as_u16(),
        message,
    }
}
