//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each input line is typed into the game
//! key by key, so it behaves exactly like the keyboard in the TUI.

use super::CommandError;
use crate::core::Key;
use crate::output::{print_game, print_game_over};
use crate::session::{GameState, SessionStore};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Give up waiting for the word list after this long
const LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// What the loop should do after a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Feed one input line to the store
///
/// `:new` and `:quit` are commands; `-` deletes a letter; other letters are
/// typed. The line ends with a submit, which does nothing unless the buffer
/// is full.
pub fn apply_line(store: &mut SessionStore, line: &str) -> LineOutcome {
    match line.trim() {
        ":quit" | ":q" => return LineOutcome::Quit,
        ":new" | ":n" => {
            store.new_game();
            return LineOutcome::Continue;
        }
        _ => {}
    }

    for c in line.trim().chars() {
        if c == '-' {
            store.keypress(Key::Delete);
        } else if let Some(key) = Key::letter(c) {
            store.keypress(key);
        }
    }
    store.submit_if_full();
    LineOutcome::Continue
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if the word list takes too long
/// to load.
pub fn run_simple(store: &mut SessionStore) -> Result<(), CommandError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Duel - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in six tries.");
    println!("Type letters and press Enter; '-' deletes the last letter.");
    println!("Commands: ':new' for a new game, ':quit' to exit\n");

    store.start();
    loop {
        wait_with_spinner(store)?;

        match store.state() {
            GameState::InProgress(_) => break,
            GameState::Error(cause) => {
                println!("{} {cause}", "✗".red());
                let answer = get_user_input("Retry? (yes/no)")?.to_lowercase();
                if !matches!(answer.as_str(), "yes" | "y") {
                    return Err(CommandError::LoadFailed(cause.clone()));
                }
                store.retry();
            }
            GameState::Init | GameState::Loading => store.start(),
        }
    }

    println!(
        "{} Loaded {} words\n",
        "✓".green(),
        store.repository().len()
    );

    loop {
        let Some(game) = store.state().game() else {
            return Ok(());
        };
        print_game(game);

        if game.is_ended() {
            print_game_over(game);
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    store.new_game();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let typed = game.guess.as_string();
        let prompt = if typed.is_empty() {
            "Guess".to_string()
        } else {
            format!("Guess [{typed}]")
        };
        let line = get_user_input(&prompt)?;
        if apply_line(store, &line) == LineOutcome::Quit {
            break;
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Block on the load with a spinner until it finishes or times out
fn wait_with_spinner(store: &mut SessionStore) -> Result<(), CommandError> {
    if !store.state().is_loading() {
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Loading word list...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let started = Instant::now();
    let loaded = store.wait_for_load(LOAD_TIMEOUT);
    spinner.finish_and_clear();

    if loaded {
        tracing::debug!(elapsed_ms = started.elapsed().as_millis(), "load finished");
        Ok(())
    } else {
        Err(CommandError::LoadTimedOut(LOAD_TIMEOUT.as_secs()))
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, CommandError> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // End of input behaves like :quit
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordRepository;
    use crate::session::SessionConfig;
    use crate::wordlists::WordSource;
    use std::sync::Arc;

    struct ListSource;

    impl WordSource for ListSource {
        fn origin(&self) -> String {
            "test list".to_string()
        }

        fn read_lines(&self) -> io::Result<Vec<String>> {
            Ok(vec!["world".to_string(), "hello".to_string()])
        }
    }

    fn loaded_store(auto_submit: bool) -> SessionStore {
        let mut store = SessionStore::new(
            Arc::new(WordRepository::new()),
            Arc::new(ListSource),
            SessionConfig { auto_submit },
        );
        store.start();
        assert!(store.wait_for_load(Duration::from_secs(5)));
        store
    }

    #[test]
    fn line_types_and_submits() {
        let mut store = loaded_store(false);
        let secret = store.state().game().unwrap().secret.word();

        assert_eq!(apply_line(&mut store, &secret), LineOutcome::Continue);

        assert!(store.state().game().unwrap().is_guessed());
    }

    #[test]
    fn partial_line_stays_in_buffer() {
        let mut store = loaded_store(false);
        apply_line(&mut store, "wor");
        apply_line(&mut store, "-");

        let game = store.state().game().unwrap();
        assert_eq!(game.guess.as_string(), "WO");
        assert_eq!(game.board.active_index(), Some(0));
    }

    #[test]
    fn quit_and_new_commands() {
        let mut store = loaded_store(true);
        let secret = store.state().game().unwrap().secret.word();
        apply_line(&mut store, &secret);
        assert!(store.state().game().unwrap().is_ended());

        assert_eq!(apply_line(&mut store, ":new"), LineOutcome::Continue);
        assert!(!store.state().game().unwrap().is_ended());

        assert_eq!(apply_line(&mut store, " :quit "), LineOutcome::Quit);
    }

    #[test]
    fn digits_and_spaces_are_ignored() {
        let mut store = loaded_store(false);
        apply_line(&mut store, "w 1o");
        assert_eq!(store.state().game().unwrap().guess.as_string(), "WO");
    }
}
