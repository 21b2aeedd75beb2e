//! Game session
//!
//! Pure state transitions plus the store that owns the live state and runs the
//! word list load.

mod machine;
mod state;
mod store;

pub use machine::reduce;
pub use state::{Action, GameState};
pub use store::{SessionStore, Subscriber};

/// Session behaviour chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Submit the guess as soon as the fifth letter is typed
    pub auto_submit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { auto_submit: true }
    }
}
