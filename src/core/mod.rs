//! Core domain types for the game
//!
//! This module contains the board, tile, guess and keyboard value types.
//! All types here are plain immutable values with derived properties.

mod board;
mod game;
mod guess;
mod keyboard;
mod row;
mod tile;
mod word;

pub use board::{Board, MAX_ATTEMPTS};
pub use game::Game;
pub use guess::Guess;
pub use keyboard::{DELETE_KEY_WIDTH, KEY_COUNT, KEY_WIDTH, Key, KeyColor, KeyTile, KeyTiles};
pub use row::BoardRow;
pub use tile::Tile;
pub use word::{WORD_LENGTH, Word, WordError};
