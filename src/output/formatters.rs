//! Formatting utilities for terminal output

use crate::core::{Board, BoardRow, KeyColor, KeyTile, Tile};
use colored::{ColoredString, Colorize};

/// Emoji square for a tile
#[must_use]
pub const fn tile_to_emoji(tile: Tile) -> char {
    match tile {
        Tile::Hit(_) => '🟩',
        Tile::Misplaced(_) => '🟨',
        Tile::Miss(_) => '⬛',
        Tile::Active(_) | Tile::Inactive => '⬜',
    }
}

/// Format a row as an emoji string
#[must_use]
pub fn row_to_emoji(row: &BoardRow) -> String {
    row.tiles().iter().map(|&tile| tile_to_emoji(tile)).collect()
}

/// Shareable summary of a finished game: a score line and the emoji grid
///
/// The score is `N/6` when guessed and `X/6` otherwise.
#[must_use]
pub fn share_text(board: &Board) -> String {
    let score = board
        .attempt_count()
        .map_or_else(|| "X".to_string(), |n| n.to_string());

    let mut text = format!("Word Duel {score}/{}", board.rows().len());
    for row in board.evaluated_rows() {
        text.push('\n');
        text.push_str(&row_to_emoji(row));
    }
    text
}

/// A tile as a colored, padded letter cell
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let cell = match tile.letter() {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    };
    match tile {
        Tile::Hit(_) => cell.black().on_green().bold(),
        Tile::Misplaced(_) => cell.black().on_yellow().bold(),
        Tile::Miss(_) => cell.white().on_bright_black(),
        Tile::Active(_) => cell.bright_white().bold(),
        Tile::Inactive => cell.bright_black(),
    }
}

/// A row as colored cells
#[must_use]
pub fn colored_row(row: &BoardRow) -> String {
    row.tiles()
        .iter()
        .map(|&tile| colored_tile(tile).to_string())
        .collect()
}

/// A keyboard key as colored text
#[must_use]
pub fn colored_key(key: &KeyTile) -> ColoredString {
    let label = key.key.to_string();
    match key.color {
        KeyColor::Hit => label.black().on_green(),
        KeyColor::Misplaced => label.black().on_yellow(),
        KeyColor::Miss => label.bright_black(),
        KeyColor::Unset => label.normal(),
    }
}
