//! Helper templates for running generation outside postsmith.
//!
//! These are shown to the user verbatim for copying into their own
//! automation. Nothing here is ever executed by postsmith itself.

/// Which helper template to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Shell script that reads the exported config and calls the API once.
    Script,
    /// CI workflow running the script on a schedule.
    Workflow,
}

impl TemplateKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Script => "generate-post.sh",
            Self::Workflow => ".github/workflows/postsmith.yml",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Self::Script => SCRIPT_TEMPLATE,
            Self::Workflow => WORKFLOW_TEMPLATE,
        }
    }
}

const SCRIPT_TEMPLATE: &str = r#"#!/usr/bin/env bash
# Generates one post from postsmith-config.json. Requires curl and jq.
set -euo pipefail

CONFIG="${1:-postsmith-config.json}"
: "${GEMINI_API_KEY:?GEMINI_API_KEY must be set}"

PERSONA="$(jq -r '.persona' "$CONFIG")"
COUNT="$(jq '.sources | length' "$CONFIG")"
if [ "$COUNT" -eq 0 ]; then
  echo "No sources configured in $CONFIG" >&2
  exit 1
fi
SOURCE="$(jq -r ".sources[$((RANDOM % COUNT))]" "$CONFIG")"

PROMPT="$PERSONA

Read the content at the URL below and summarize its key point. Based on that summary, write one engaging social media post of at most 140 characters. Use emoji effectively to catch the eye. Output only the post text.

URL: $SOURCE"

jq -n --arg text "$PROMPT" '{contents: [{role: "user", parts: [{text: $text}]}]}' |
  curl -sS -X POST \
    -H 'Content-Type: application/json' \
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=${GEMINI_API_KEY}" \
    -d @- |
  jq -r '.candidates[0].content.parts[0].text // empty'
"#;

const WORKFLOW_TEMPLATE: &str = r#"name: postsmith

on:
  schedule:
    # Adjust to your schedule times (UTC)
    - cron: "0 9 * * *"
    - cron: "0 12 * * *"
    - cron: "0 18 * * *"
  workflow_dispatch:

jobs:
  generate:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Generate post
        env:
          GEMINI_API_KEY: ${{ secrets.GEMINI_API_KEY }}
        run: bash generate-post.sh postsmith-config.json
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_reference_exported_config() {
        for kind in [TemplateKind::Script, TemplateKind::Workflow] {
            assert!(kind.body().contains("postsmith-config.json"));
        }
        assert!(TemplateKind::Script.body().starts_with("#!/usr/bin/env bash"));
        assert!(
            TemplateKind::Workflow
                .body()
                .contains(TemplateKind::Script.file_name())
        );
    }
}
