//! REPL command parsing.

use std::path::PathBuf;

/// Command words offered for completion.
pub const COMMAND_WORDS: &[&str] = &[
    "show", "persona", "source", "time", "quota", "save", "reset", "generate", "history",
    "export", "help", "quit", "exit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Show,
    Persona(String),
    AddSource(String),
    /// Zero-based index (entered one-based)
    RemoveSource(usize),
    AddTime(String),
    RemoveTime(usize),
    Quota(u32),
    Save,
    Reset,
    Generate,
    History,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// Parses one input line.
///
/// Returns an error message for unknown commands or malformed arguments.
pub fn parse(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "show" => Ok(ReplCommand::Show),
        "persona" if !rest.is_empty() => Ok(ReplCommand::Persona(rest.to_string())),
        "persona" => Err("usage: persona <text>".into()),
        "source" => parse_list_command(rest, "source <add URL | rm N>")
            .map(|action| match action {
                ListAction::Add(url) => ReplCommand::AddSource(url),
                ListAction::Remove(index) => ReplCommand::RemoveSource(index),
            }),
        "time" => parse_list_command(rest, "time <add HH:MM | rm N>").map(|action| match action {
            ListAction::Add(time) => ReplCommand::AddTime(time),
            ListAction::Remove(index) => ReplCommand::RemoveTime(index),
        }),
        "quota" => rest
            .parse::<u32>()
            .map(ReplCommand::Quota)
            .map_err(|_| "usage: quota <1-50>".to_string()),
        "save" => Ok(ReplCommand::Save),
        "reset" => Ok(ReplCommand::Reset),
        "generate" | "gen" => Ok(ReplCommand::Generate),
        "history" => Ok(ReplCommand::History),
        "export" if rest.is_empty() => Ok(ReplCommand::Export(None)),
        "export" => Ok(ReplCommand::Export(Some(PathBuf::from(rest)))),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        other => Err(format!("Unknown command '{other}'. Type 'help'.")),
    }
}

enum ListAction {
    Add(String),
    Remove(usize),
}

fn parse_list_command(rest: &str, usage: &str) -> Result<ListAction, String> {
    let (action, arg) = rest
        .split_once(char::is_whitespace)
        .map(|(a, b)| (a, b.trim()))
        .unwrap_or((rest, ""));

    match action {
        // Empty values reach the draft controller, which ignores them
        "add" => Ok(ListAction::Add(arg.to_string())),
        "rm" | "remove" => arg
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(ListAction::Remove)
            .ok_or_else(|| format!("usage: {usage} (N starts at 1)")),
        _ => Err(format!("usage: {usage}")),
    }
}

pub const HELP: &str = "\
show                 Show draft settings
persona <text>       Replace the persona
source add <url>     Add a source URL
source rm <n>        Remove source number n
time add <HH:MM>     Add a schedule time
time rm <n>          Remove schedule time number n
quota <n>            Set posts per day (1-50)
save                 Commit the draft
reset                Discard the draft
generate             Generate a post from the saved settings
history              Show past posts
export [path]        Export persona and sources as JSON
quit                 Exit

Data lives in $POSTSMITH_HOME (default: ~/.config/postsmith).";
