//! Game rules
//!
//! Scoring a guess against the secret word and advancing the board.

pub mod evaluator;
pub mod transition;

pub use evaluator::{Evaluation, evaluate, evaluate_guess, score};
pub use transition::{Outcome, advance};
