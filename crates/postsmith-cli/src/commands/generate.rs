use anyhow::{Result, bail};
use postsmith_application::PostsmithSession;
use postsmith_core::generation::GenerationOutcome;

/// Generates one post and prints it. Failures exit non-zero with the
/// user-facing message only.
pub async fn run(session: &mut PostsmithSession) -> Result<()> {
    match session.generate().await {
        GenerationOutcome::Success(post) => {
            println!("{}", post.text);
            eprintln!("({} chars, from {})", post.text.chars().count(), post.source_url);
            Ok(())
        }
        GenerationOutcome::Failure(reason) => bail!("{}", reason.user_message()),
        GenerationOutcome::Idle | GenerationOutcome::InProgress => Ok(()),
    }
}
