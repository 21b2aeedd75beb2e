//! Display functions for the text-mode game and commands

use super::formatters::{colored_key, colored_row, row_to_emoji, share_text};
use crate::core::{BoardRow, Game, KeyTiles};
use colored::Colorize;

/// Print the board, one colored row per line
pub fn print_board(game: &Game) {
    println!();
    for row in game.board.rows() {
        println!("    {}", colored_row(row));
    }
    println!();
}

/// Print the keyboard with feedback colors
pub fn print_keyboard(keys: &KeyTiles) {
    for (indent, row) in keys.rows().iter().enumerate() {
        let line: Vec<String> = row.iter().map(|key| colored_key(key).to_string()).collect();
        println!("{}{}", " ".repeat(4 + indent), line.join(" "));
    }
    println!();
}

/// Print the whole game snapshot
pub fn print_game(game: &Game) {
    print_board(game);
    print_keyboard(&game.key_tiles);

    if game.non_word_entered {
        println!("{}", "Not in word list".red().bold());
    }
    if game.repeated_guess {
        println!("{}", "Same as previous guess".red().bold());
    }
}

/// Print the end-of-game banner and share text
pub fn print_game_over(game: &Game) {
    println!("{}", "═".repeat(40).bright_cyan());
    match game.board.attempt_count() {
        Some(attempts) => println!(
            "  {} Solved in {} {}",
            "🎉".bright_green(),
            attempts.to_string().bright_cyan().bold(),
            if attempts == 1 { "guess" } else { "guesses" }
        ),
        None => println!(
            "  Out of guesses. The word was {}",
            game.secret.word().bright_yellow().bold()
        ),
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", share_text(&game.board));
}

/// Print one scored row for the `score` command
pub fn print_score_result(secret: &str, row: &BoardRow) {
    println!(
        "\nSecret: {}",
        secret.to_uppercase().bright_yellow().bold()
    );
    println!("Guess:  {}  {}", colored_row(row), row_to_emoji(row));
    if row.is_guessed() {
        println!("{}", "All letters in place!".bright_green());
    }
    println!();
}

/// Print whether a word is in the list for the `check` command
pub fn print_check_result(word: &str, found: bool) {
    let word = word.to_uppercase();
    if found {
        println!("{} {} is in the word list", "✓".green(), word.bold());
    } else {
        println!("{} {} is not in the word list", "✗".red(), word.bold());
    }
}
