//! Word Duel
//!
//! A five-letter word guessing game: six tries, per-letter feedback, and a
//! keyboard that remembers what each letter has shown.
//!
//! # Quick Start
//!
//! ```rust
//! use word_duel::core::{Tile, Word};
//! use word_duel::engine::score;
//!
//! let guess = Word::new("world").unwrap();
//! let answer = Word::new("hello").unwrap();
//!
//! let tiles = score(&guess, &answer);
//! assert_eq!(tiles[1], Tile::Misplaced('O'));
//! assert_eq!(tiles[3], Tile::Hit('L'));
//! ```

// Core domain types
pub mod core;

// Word lookup and sampling
pub mod dictionary;

// Guess scoring and row transitions
pub mod engine;

// Game state machine and store
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
