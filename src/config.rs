use crate::debug_log;
use crate::wordbank::DEFAULT_WORDS_PATH;
use std::path::{Path, PathBuf};

/// Where a [`Guesser`](crate::guesser::Guesser) gets its words from.
#[derive(Clone, Debug)]
pub struct GuesserConfig {
    /// Explicit in-memory word list; takes priority over `words_path`.
    pub words: Option<Vec<String>>,
    pub words_path: PathBuf,
    /// Pre-selected word length. Skips the interactive prompt when set.
    pub length: Option<usize>,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self {
            words: None,
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            length: None,
        }
    }
}

impl GuesserConfig {
    pub fn with_words(words: Vec<String>) -> Self {
        Self {
            words: Some(words),
            ..Self::default()
        }
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            words_path: path.into(),
            ..Self::default()
        }
    }

    /// The path to read words from.
    ///
    /// Only the default path falls back to the user data directory.
    pub fn resolved_words_path(&self) -> PathBuf {
        if self.words_path != Path::new(DEFAULT_WORDS_PATH) || self.words_path.exists() {
            return self.words_path.clone();
        }
        match data_dir_words_path() {
            Some(path) if path.exists() => {
                debug_log!("Using word list from data directory: {}", path.display());
                path
            }
            _ => self.words_path.clone(),
        }
    }
}

fn data_dir_words_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordle-guesser").join(DEFAULT_WORDS_PATH))
}
