//! Prompt construction.

/// Model identifier sent with every generation request.
pub const GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Target length of a generated post, in characters.
pub const MAX_POST_CHARS: usize = 140;

/// Builds the prompt for one generation: persona, fixed instructions, then the
/// source URL.
pub fn build_prompt(persona: &str, source_url: &str) -> String {
    format!(
        "{persona}\n\n\
         Read the content at the URL below and summarize its key point. \
         Based on that summary, write one engaging social media post of at most \
         {MAX_POST_CHARS} characters. Use emoji effectively to catch the eye. \
         Output only the post text.\n\n\
         URL: {source_url}",
        persona = persona.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_persona_instruction_and_url() {
        let prompt = build_prompt("  Speak like a pirate.  ", "https://a.example/feed");

        assert!(prompt.starts_with("Speak like a pirate."));
        assert!(prompt.contains("140 characters"));
        assert!(prompt.contains("emoji"));
        assert!(prompt.ends_with("URL: https://a.example/feed"));
    }

    #[test]
    fn test_persona_precedes_url() {
        let prompt = build_prompt("persona text", "https://b.example");
        let persona_at = prompt.find("persona text").unwrap();
        let url_at = prompt.find("https://b.example").unwrap();
        assert!(persona_at < url_at);
    }
}
