//! TUI application state and logic

use crate::core::{Game, Key, MAX_ATTEMPTS};
use crate::session::{GameState, SessionStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the event loop wakes up to check for a finished load
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub store: SessionStore,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    last_seen: GameState,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    pub fn record(&mut self, game: &Game) {
        self.total_games += 1;
        if let Some(attempts) = game.board.attempt_count() {
            self.games_won += 1;
            self.guess_distribution[attempts] += 1;
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts are far below f64 precision
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            last_seen: GameState::Init,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// React to a new snapshot: messages and statistics
    pub fn refresh(&mut self) {
        if *self.store.state() == self.last_seen {
            return;
        }
        let current = self.store.state().clone();
        let previous = std::mem::replace(&mut self.last_seen, current.clone());

        match (&previous, &current) {
            (_, GameState::Loading) => {
                self.add_message("Loading word list...", MessageStyle::Info);
            }
            (_, GameState::Error(cause)) => {
                self.add_message(&format!("{cause}"), MessageStyle::Error);
                self.add_message("Press Ctrl-R to retry.", MessageStyle::Info);
            }
            (GameState::InProgress(before), GameState::InProgress(after)) => {
                self.on_game_update(before, after);
            }
            (_, GameState::InProgress(after)) if !after.is_ended() => {
                self.add_message(
                    &format!(
                        "Loaded {} words. Guess the five-letter word!",
                        self.store.repository().len()
                    ),
                    MessageStyle::Info,
                );
            }
            _ => {}
        }
    }

    fn on_game_update(&mut self, before: &Game, after: &Game) {
        if before.is_ended() && !after.is_ended() {
            self.add_message("New game started!", MessageStyle::Info);
            return;
        }

        if after.non_word_entered && !before.non_word_entered {
            self.add_message("Not in word list", MessageStyle::Error);
        }

        if after.repeated_guess && !before.repeated_guess {
            self.add_message("Same as previous guess", MessageStyle::Error);
        }

        if after.is_ended() && !before.is_ended() {
            self.stats.record(after);
            self.celebrate(after);
        }
    }

    fn celebrate(&mut self, game: &Game) {
        if let Some(attempts) = game.board.attempt_count() {
            let celebration = match attempts {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Out of guesses! The word was {}", game.secret.word()),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn is_ended(&self) -> bool {
        self.store.state().game().is_some_and(Game::is_ended)
    }

    /// Start over; a game left unfinished after a scored guess counts as a loss
    fn new_game(&mut self) {
        if let Some(game) = self.store.state().game()
            && !game.is_ended()
            && game.board.evaluated_rows().next().is_some()
        {
            let secret = game.secret.word();
            self.stats.record(game);
            self.add_message(
                &format!("Game abandoned. The word was {secret}"),
                MessageStyle::Info,
            );
        }
        self.store.new_game();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('r') if ctrl => self.store.retry(),
            KeyCode::Char('q') if self.is_ended() => self.should_quit = true,
            KeyCode::Char('n') if self.is_ended() => self.new_game(),
            KeyCode::Char(c) if !ctrl => {
                if let Some(letter) = Key::letter(c) {
                    self.store.keypress(letter);
                }
            }
            KeyCode::Backspace => self.store.keypress(Key::Delete),
            KeyCode::Enter => self.store.submit_if_full(),
            _ => {}
        }

        self.refresh();
    }

    /// Pick up a finished load, if any
    pub fn tick(&mut self) {
        if self.store.poll_load() {
            self.refresh();
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "tui exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.store.start();
    app.refresh();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Some terminals also report releases and repeats
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordRepository;
    use crate::session::SessionConfig;
    use crate::wordlists::WordSource;
    use std::sync::Arc;

    struct OneWord;

    impl WordSource for OneWord {
        fn origin(&self) -> String {
            "one word".to_string()
        }

        fn read_lines(&self) -> io::Result<Vec<String>> {
            Ok(vec!["world".to_string(), "hello".to_string()])
        }
    }

    fn loaded_app() -> App {
        let store = SessionStore::new(
            Arc::new(WordRepository::new()),
            Arc::new(OneWord),
            SessionConfig::default(),
        );
        let mut app = App::new(store);
        app.store.start();
        assert!(app.store.wait_for_load(Duration::from_secs(5)));
        app.refresh();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn secret(app: &App) -> String {
        app.state().game().unwrap().secret.word().to_lowercase()
    }

    #[test]
    fn loading_reports_word_count() {
        let app = loaded_app();
        assert!(app.messages.iter().any(|m| m.text.contains("Loaded 2 words")));
    }

    #[test]
    fn winning_records_statistics() {
        let mut app = loaded_app();
        let word = secret(&app);
        type_word(&mut app, &word);

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Info);
    }

    #[test]
    fn non_word_shows_error() {
        let mut app = loaded_app();
        type_word(&mut app, "zzzzz");
        assert!(app.messages.iter().any(|m| m.text == "Not in word list"));
    }

    #[test]
    fn n_after_game_end_starts_new_game() {
        let mut app = loaded_app();
        let word = secret(&app);
        type_word(&mut app, &word);

        press(&mut app, KeyCode::Char('n'));

        let game = app.state().game().unwrap();
        assert!(!game.is_ended());
        assert!(game.guess.is_empty());
    }

    #[test]
    fn q_quits_only_after_game_end() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.state().game().unwrap().guess.letters(), &['Q']);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn repeated_guess_shows_message() {
        let mut app = loaded_app();
        let word = if secret(&app) == "hello" { "world" } else { "hello" };
        type_word(&mut app, word);
        type_word(&mut app, word);

        assert_eq!(app.messages.last().unwrap().text, "Same as previous guess");
        assert_eq!(app.state().game().unwrap().board.active_index(), Some(1));
    }

    #[test]
    fn abandoning_after_a_guess_counts_as_loss() {
        let mut app = loaded_app();
        let word = if secret(&app) == "hello" { "world" } else { "hello" };
        type_word(&mut app, word);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.state().game().unwrap().board.evaluated_rows().next().is_none());
    }

    #[test]
    fn new_game_before_any_guess_is_not_counted() {
        let mut app = loaded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn backspace_deletes() {
        let mut app = loaded_app();
        type_word(&mut app, "wo");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().game().unwrap().guess.letters(), &['W']);
    }

    #[test]
    fn statistics_record_loss() {
        let mut stats = Statistics::default();
        let game = Game::new(crate::core::BoardRow::hit_from_str("world").unwrap());
        stats.record(&game);
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
