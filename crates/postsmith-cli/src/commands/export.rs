use anyhow::{Context, Result};
use postsmith_application::PostsmithSession;
use std::path::Path;

pub fn run(session: &PostsmithSession, output: &Path) -> Result<()> {
    session
        .export_config(output)
        .with_context(|| format!("Failed to export to {}", output.display()))?;
    println!("Exported to {}", output.display());
    Ok(())
}
