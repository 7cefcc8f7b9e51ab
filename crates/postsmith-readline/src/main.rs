use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use postsmith_application::{DEFAULT_EXPORT_FILE, PostsmithSession, open_session};
use postsmith_core::generation::GenerationOutcome;
use postsmith_core::settings::{Settings, SettingsEdit};
use postsmith_infrastructure::PostsmithPaths;
use postsmith_infrastructure::logging::init_logging;

mod command;

use command::{COMMAND_WORDS, HELP, ReplCommand};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_WORDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split_whitespace().next().unwrap_or_default();
        if self.commands.iter().any(|cmd| cmd == word) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }

        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

fn print_settings(settings: &Settings, dirty: bool) {
    let title = if dirty {
        "Settings (unsaved changes)".bright_yellow()
    } else {
        "Settings".bright_magenta()
    };
    println!("{}", title.bold());
    println!("  {} {}", "persona:".bright_black(), settings.persona);

    println!("  {}", "sources:".bright_black());
    if settings.sources.is_empty() {
        println!("    {}", "(none)".bright_black());
    }
    for (i, source) in settings.sources.iter().enumerate() {
        println!("    {}. {}", i + 1, source);
    }

    println!(
        "  {} {}",
        "schedule:".bright_black(),
        if settings.schedule_times.is_empty() {
            "(none)".to_string()
        } else {
            settings
                .schedule_times
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{}. {}", i + 1, t))
                .collect::<Vec<_>>()
                .join("  ")
        }
    );
    println!("  {} {}", "posts/day:".bright_black(), settings.posts_per_day);
}

fn print_outcome(outcome: &GenerationOutcome) {
    match outcome {
        GenerationOutcome::Success(post) => {
            for line in post.text.lines() {
                println!("{}", line.bright_blue());
            }
            println!(
                "{}",
                format!("({} chars, from {})", post.text.chars().count(), post.source_url)
                    .bright_black()
            );
        }
        GenerationOutcome::Failure(reason) => println!("{}", reason.user_message().red()),
        GenerationOutcome::Idle | GenerationOutcome::InProgress => {}
    }
}

fn print_history(session: &PostsmithSession) {
    if session.history().is_empty() {
        println!("{}", "No posts yet.".bright_black());
        return;
    }
    for entry in session.history() {
        println!("{}", format!("[{}] {}", entry.timestamp, entry.source_url).bright_magenta());
        for line in entry.text.lines() {
            println!("  {}", line.bright_blue());
        }
    }
}

/// Reports whether an edit actually changed the draft.
fn report_change(changed: bool, ignored: &str) {
    if !changed {
        println!("{}", ignored.bright_black());
    }
}

/// The main entry point for the postsmith REPL.
///
/// Runs one session: edits land in the draft until `save`, `reset` throws
/// them away, and `generate` always works from the saved settings.
#[tokio::main]
async fn main() -> Result<()> {
    // ===== Backend Initialization =====
    // Home comes from POSTSMITH_HOME or the platform config directory
    let paths = PostsmithPaths::new(None).context("Failed to resolve postsmith home directory")?;
    let _log_guard = init_logging(&paths.logs_dir());
    let mut session = open_session(&paths);

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Postsmith REPL ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for commands, 'quit' to exit.".bright_black()
    );
    println!();

    let mut quit_requested = false;

    // ===== Main REPL Loop =====
    loop {
        let prompt = if session.draft().is_dirty() {
            "postsmith*> "
        } else {
            "postsmith> "
        };

        let line = match rl.readline(prompt) {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                if session.draft().is_dirty() {
                    println!("{}", "Exiting with unsaved changes discarded.".yellow());
                }
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let command = match command::parse(trimmed) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.yellow());
                continue;
            }
        };

        if command != ReplCommand::Quit {
            quit_requested = false;
        }

        match command {
            ReplCommand::Show => print_settings(session.draft().draft(), session.draft().is_dirty()),
            ReplCommand::Persona(text) => {
                session.draft_mut().edit(SettingsEdit::Persona(text));
            }
            ReplCommand::AddSource(url) => {
                let changed = session.draft_mut().add_source(&url);
                report_change(changed, "Ignored: empty or already listed.");
            }
            ReplCommand::RemoveSource(index) => {
                let changed = session.draft_mut().remove_source(index);
                report_change(changed, "Ignored: no such source.");
            }
            ReplCommand::AddTime(time) => {
                let changed = session.draft_mut().add_schedule_time(&time);
                report_change(changed, "Ignored: not a new HH:MM time.");
            }
            ReplCommand::RemoveTime(index) => {
                let changed = session.draft_mut().remove_schedule_time(index);
                report_change(changed, "Ignored: no such time.");
            }
            ReplCommand::Quota(n) => {
                session.draft_mut().edit(SettingsEdit::PostsPerDay(n));
                println!(
                    "{}",
                    format!("posts/day: {}", session.draft().draft().posts_per_day).bright_black()
                );
            }
            ReplCommand::Save => {
                if session.draft_mut().commit() {
                    println!("{}", "Saved.".green());
                } else {
                    println!("{}", "Nothing to save.".bright_black());
                }
            }
            ReplCommand::Reset => {
                if session.draft_mut().discard() {
                    println!("{}", "Changes discarded.".green());
                } else {
                    println!("{}", "Nothing to reset.".bright_black());
                }
            }
            ReplCommand::Generate => {
                if session.draft().is_dirty() {
                    println!(
                        "{}",
                        "Note: generating from saved settings; unsaved changes are not used."
                            .yellow()
                    );
                }
                println!("{}", "Generating...".bright_black());
                let outcome = session.generate().await;
                print_outcome(outcome);
            }
            ReplCommand::History => print_history(&session),
            ReplCommand::Export(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
                match session.export_config(&path) {
                    Ok(()) => println!("{}", format!("Exported to {}", path.display()).green()),
                    Err(e) => println!("{}", format!("Export failed: {}", e).red()),
                }
            }
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Quit => {
                if session.draft().is_dirty() && !quit_requested {
                    println!(
                        "{}",
                        "Unsaved changes. Type 'save' or 'reset', or 'quit' again to discard them."
                            .yellow()
                    );
                    quit_requested = true;
                    continue;
                }
                println!("{}", "Goodbye!".bright_green());
                break;
            }
        }
    }

    Ok(())
}
