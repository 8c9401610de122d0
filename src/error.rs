use std::io;
use thiserror::Error;

/// Errors raised while building a [`Guesser`](crate::guesser::Guesser) or querying it.
#[derive(Error, Debug)]
pub enum GuesserError {
    /// Missing or unusable word source.
    #[error("configuration error: {0}")]
    Config(String),
    #[error("usage error: {0}")]
    Usage(String),
    /// A condition of the wrong shape, or one that cannot apply to the corpus.
    #[error("invalid condition: {0}")]
    InvalidCondition(String),
    #[error("no exclusive candidates to draw a guess from")]
    EmptyPool,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GuesserError>;
