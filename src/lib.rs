// Library interface for wordle-guesser
// This allows integration tests to access internal modules

pub mod cli;
pub mod condition;
pub mod config;
pub mod error;
pub mod guesser;
pub mod length;
pub mod logging;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use condition::Condition;
pub use config::GuesserConfig;
pub use error::{GuesserError, Result};
pub use guesser::{CandidatePool, Guesser, Query, is_exclusive};
pub use length::{CliLengthPrompt, LengthPrompt, LengthState, resolve_length};
pub use wordbank::{load_words_from_file, load_words_from_str};
