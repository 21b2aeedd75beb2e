//! Word Duel - CLI
//!
//! Guess the hidden five-letter word in six tries, in a TUI or plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use word_duel::{
    commands::{check_word, run_simple, score_guess},
    dictionary::WordRepository,
    interactive::{App, run_tui},
    output::{print_check_result, print_score_result},
    session::{SessionConfig, SessionStore},
    wordlists::WordListChoice,
};

#[derive(Parser)]
#[command(
    name = "word_duel",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Submit with Enter instead of as soon as the fifth letter is typed
    #[arg(long, global = true)]
    manual_submit: bool,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Check whether a word is in the word list
    Check {
        /// Word to look up
        word: String,
    },

    /// Score a guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Install the log subscriber
///
/// Logs go to `log_file` when given, otherwise to stderr unless `quiet`.
/// `default_level` applies when `RUST_LOG` is unset.
fn init_logging(log_file: Option<&Path>, quiet: bool, default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init();
    } else if !quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
    Ok(())
}

/// Level used when `RUST_LOG` is unset
///
/// Simple mode shares stderr with the load spinner, so its console output is
/// kept to warnings.
fn default_log_level(command: &Commands, log_file: Option<&Path>) -> &'static str {
    match (command, log_file) {
        (Commands::Simple, None) => "warn",
        _ => "info",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the screen, so it only logs to a file
    init_logging(
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
        default_log_level(&command, cli.log_file.as_deref()),
    )?;

    let choice = WordListChoice::from_arg(&cli.wordlist);
    tracing::debug!(wordlist = %choice, manual_submit = cli.manual_submit, "starting");

    let config = SessionConfig {
        auto_submit: !cli.manual_submit,
    };
    let repository = Arc::new(WordRepository::new());
    let source = choice.into_source();

    match command {
        Commands::Play => {
            let store = SessionStore::new(repository, source, config);
            run_tui(App::new(store))
        }
        Commands::Simple => {
            let mut store = SessionStore::new(repository, source, config);
            run_simple(&mut store)?;
            Ok(())
        }
        Commands::Check { word } => {
            let found = check_word(&word, &repository, source.as_ref())?;
            print_check_result(&word, found);
            Ok(())
        }
        Commands::Score { secret, guess } => {
            let row = score_guess(&secret, &guess)?;
            print_score_result(&secret, &row);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_mode_console_logs_warnings_only() {
        assert_eq!(default_log_level(&Commands::Simple, None), "warn");
        assert_eq!(
            default_log_level(&Commands::Simple, Some(Path::new("duel.log"))),
            "info"
        );
    }

    #[test]
    fn other_commands_log_info() {
        let check = Commands::Check {
            word: "world".to_string(),
        };
        assert_eq!(default_log_level(&check, None), "info");
        assert_eq!(default_log_level(&Commands::Play, None), "info");
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["word_duel", "--manual-submit"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.manual_submit);
        assert_eq!(cli.wordlist, "all");
    }
}
