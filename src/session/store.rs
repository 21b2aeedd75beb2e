//! Single-owner holder of the session state
//!
//! The store owns the current [`GameState`], runs the one-shot word list load
//! on the rayon pool and tells subscribers whenever the snapshot changes.

use super::{Action, GameState, SessionConfig, reduce};
use crate::core::Key;
use crate::dictionary::{DictionaryError, WordRepository};
use crate::wordlists::WordSource;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

/// Callback run with each new snapshot
pub type Subscriber = Box<dyn Fn(&GameState)>;

/// Result of one load task, tagged with the load it belongs to
#[derive(Debug)]
struct LoadResult {
    generation: u64,
    result: Result<(), DictionaryError>,
}

pub struct SessionStore {
    state: GameState,
    repository: Arc<WordRepository>,
    source: Arc<dyn WordSource>,
    config: SessionConfig,
    subscribers: Vec<Subscriber>,
    generation: u64,
    load_tx: Sender<LoadResult>,
    load_rx: Receiver<LoadResult>,
}

impl SessionStore {
    #[must_use]
    pub fn new(
        repository: Arc<WordRepository>,
        source: Arc<dyn WordSource>,
        config: SessionConfig,
    ) -> Self {
        let (load_tx, load_rx) = mpsc::channel();
        Self {
            state: GameState::Init,
            repository,
            source,
            config,
            subscribers: Vec::new(),
            generation: 0,
            load_tx,
            load_rx,
        }
    }

    /// Current read-only snapshot
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn repository(&self) -> &WordRepository {
        &self.repository
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&GameState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Begin loading the word list
    ///
    /// Only acts in `Init`. If the repository is already populated the load
    /// fails at once with `AlreadyInitialised`; otherwise a single load task is
    /// spawned and its result is picked up by [`Self::poll_load`] or
    /// [`Self::wait_for_load`].
    pub fn start(&mut self) {
        if !matches!(self.state, GameState::Init) {
            return;
        }
        self.dispatch(Action::Start);
        self.generation += 1;
        let generation = self.generation;

        if self.repository.is_loaded() {
            tracing::warn!("word list already loaded; refusing to load again");
            self.apply_load(LoadResult {
                generation,
                result: Err(DictionaryError::AlreadyInitialised),
            });
            return;
        }

        let repository = Arc::clone(&self.repository);
        let source = Arc::clone(&self.source);
        let tx = self.load_tx.clone();
        tracing::debug!(generation, "spawning word list load");
        rayon::spawn(move || {
            let result = repository.init(source.as_ref());
            if tx.send(LoadResult { generation, result }).is_err() {
                tracing::debug!(generation, "session dropped before load finished");
            }
        });
    }

    /// Return from `Error` to `Init` and load again
    pub fn retry(&mut self) {
        if matches!(self.state, GameState::Error(_)) {
            self.dispatch(Action::Retry);
            self.start();
        }
    }

    /// Deliver a finished load, if any, without blocking
    ///
    /// Returns `true` if a result was received.
    pub fn poll_load(&mut self) -> bool {
        let mut received = false;
        while let Ok(message) = self.load_rx.try_recv() {
            self.apply_load(message);
            received = true;
        }
        received
    }

    /// Block until the pending load is delivered or `timeout` passes
    ///
    /// Returns `true` once the state has left `Loading`.
    pub fn wait_for_load(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.load_rx.recv_timeout(remaining) {
                Ok(message) => self.apply_load(message),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
            }
        }
        !self.state.is_loading()
    }

    /// Type a key; with auto-submit on, a full buffer is submitted at once
    pub fn keypress(&mut self, key: Key) {
        self.dispatch(Action::Keypress(key));
        if self.config.auto_submit {
            self.submit_if_full();
        }
    }

    pub fn submit_if_full(&mut self) {
        self.dispatch(Action::SubmitIfFull);
    }

    pub fn new_game(&mut self) {
        self.dispatch(Action::NewGame);
    }

    fn apply_load(&mut self, message: LoadResult) {
        if message.generation != self.generation {
            tracing::debug!(
                generation = message.generation,
                current = self.generation,
                "dropping superseded load result"
            );
            return;
        }
        let action = match message.result {
            Ok(()) => Action::LoadSucceeded,
            Err(err) => Action::LoadFailed(Arc::new(err)),
        };
        self.dispatch(action);
    }

    fn dispatch(&mut self, action: Action) {
        let previous = self.state.clone();
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action, self.repository.as_ref());

        if self.state != previous {
            tracing::trace!(from = previous.name(), to = self.state.name(), "state changed");
            for subscriber in &self.subscribers {
                subscriber(&self.state);
            }
        }
    }
}
