use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use postsmith_application::{DEFAULT_EXPORT_FILE, TemplateKind, open_session};
use postsmith_infrastructure::PostsmithPaths;
use postsmith_infrastructure::logging::init_logging;
use postsmith_infrastructure::paths::HOME_ENV;

mod commands;

#[derive(Parser)]
#[command(name = "postsmith")]
#[command(about = "Postsmith - generate short posts from a persona and curated sources", long_about = None)]
struct Cli {
    /// Directory holding settings, history, secrets and logs
    #[arg(long, global = true, env = HOME_ENV)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the saved settings
    Show,
    /// Replace the persona text
    Persona { text: String },
    /// Manage source URLs
    Source {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage schedule times (HH:MM, stored only)
    Schedule {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Set the posts-per-day quota (1-50, stored only)
    Quota { value: u32 },
    /// Generate a post from the saved settings
    Generate,
    /// Show or clear past posts
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export persona and sources as JSON for external automation
    Export {
        #[arg(long, short, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
    /// Print a helper template for external automation
    Template { kind: TemplateArg },
    /// Create a secret.json template for the API key
    Init,
}

#[derive(Subcommand)]
enum ListAction {
    /// Add a value
    Add { value: String },
    /// Remove the entry at a position (starting at 1)
    Remove { position: usize },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Delete all past posts
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    Script,
    Workflow,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Script => TemplateKind::Script,
            TemplateArg::Workflow => TemplateKind::Workflow,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PostsmithPaths::new(cli.home).context("Failed to resolve postsmith home directory")?;
    let _log_guard = init_logging(&paths.logs_dir());
    tracing::debug!("[CLI] Using home {}", paths.home().display());

    match cli.command {
        Commands::Show => commands::settings::show(&open_session(&paths)),
        Commands::Persona { text } => {
            commands::settings::set_persona(&mut open_session(&paths), text)
        }
        Commands::Source { action } => {
            commands::settings::sources(&mut open_session(&paths), action)
        }
        Commands::Schedule { action } => {
            commands::settings::schedule(&mut open_session(&paths), action)
        }
        Commands::Quota { value } => commands::settings::quota(&mut open_session(&paths), value),
        Commands::Generate => commands::generate::run(&mut open_session(&paths)).await?,
        Commands::History {
            action: Some(HistoryAction::Clear),
            ..
        } => commands::history::clear(&mut open_session(&paths)),
        Commands::History {
            action: None,
            limit,
        } => commands::history::list(&open_session(&paths), limit),
        Commands::Export { output } => commands::export::run(&open_session(&paths), &output)?,
        Commands::Template { kind } => commands::template::print(kind.into()),
        Commands::Init => commands::init::run(&paths)?,
    }

    Ok(())
}
