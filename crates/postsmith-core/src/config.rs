//! Secret configuration model (API keys).

use serde::{Deserialize, Serialize};

/// Contents of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Informational only; generation always uses the fixed model id.
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SecretConfig {
    /// The configured Gemini API key, if present and non-blank.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .map(|g| g.api_key.trim())
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_none() {
        let config = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: "   ".to_string(),
                model_name: None,
            }),
        };
        assert!(config.gemini_api_key().is_none());
        assert!(SecretConfig::default().gemini_api_key().is_none());
    }

    #[test]
    fn test_key_is_trimmed() {
        let config: SecretConfig =
            serde_json::from_str(r#"{"gemini":{"api_key":" abc "}}"#).unwrap();
        assert_eq!(config.gemini_api_key(), Some("abc"));
    }
}
