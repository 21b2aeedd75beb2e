//! Word list loading utilities
//!
//! A word list is a newline-delimited sequence of five-letter words. It can come
//! from the list embedded at build time or from a file.

use super::WORDS;
use crate::core::Word;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Somewhere a word list can be read from in full
pub trait WordSource: Send + Sync {
    /// Human-readable origin, used in errors and logs
    fn origin(&self) -> String;

    /// Read every line of the list
    ///
    /// # Errors
    /// Returns an I/O error if the list cannot be opened or read.
    fn read_lines(&self) -> io::Result<Vec<String>>;
}

/// The list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn origin(&self) -> String {
        "embedded word list".to_string()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(WORDS.iter().map(|&w| w.to_string()).collect())
    }
}

/// A newline-delimited list on disk
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWords {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        let reader = BufReader::new(File::open(&self.path)?);
        reader.lines().collect()
    }
}

/// Which word list to play with, as chosen on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListChoice {
    Embedded,
    File(PathBuf),
}

impl WordListChoice {
    /// Parse the `--wordlist` argument: `all` selects the embedded list,
    /// anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "all" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    #[must_use]
    pub fn into_source(self) -> Arc<dyn WordSource> {
        match self {
            Self::Embedded => Arc::new(EmbeddedWords),
            Self::File(path) => Arc::new(FileWords::new(path)),
        }
    }
}

impl fmt::Display for WordListChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "all"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Keep the lines that are valid five-letter words, in order
///
/// Lines are trimmed; blank lines are skipped silently, malformed ones with a
/// debug log.
///
/// # Examples
/// ```
/// use word_duel::wordlists::loader::valid_words;
///
/// let words = valid_words(["crane", "", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
pub fn valid_words<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                tracing::debug!(line, %err, "skipping word list entry");
                None
            }
        })
        .collect()
}
