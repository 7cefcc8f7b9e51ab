use anyhow::{Context, Result};
use postsmith_infrastructure::{PostsmithPaths, SecretStorage};

/// Creates secret.json with an empty Gemini key if it does not exist yet.
pub fn run(paths: &PostsmithPaths) -> Result<()> {
    let storage = SecretStorage::with_path(paths.secret_file());
    let path = storage
        .ensure_template()
        .with_context(|| format!("Failed to create {}", paths.secret_file().display()))?;
    println!("Secret file: {}", path.display());
    println!("Fill in gemini.api_key there, or set GEMINI_API_KEY.");
    Ok(())
}
