//! Interactive terminal UI
//!
//! A ratatui front end over [`crate::session::SessionStore`].

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
