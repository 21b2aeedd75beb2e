//! Terminal output formatting
//!
//! Display utilities for the text-mode game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game, print_game_over, print_keyboard,
    print_score_result,
};
