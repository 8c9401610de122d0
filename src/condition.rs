use crate::error::{GuesserError, Result};
use std::fmt;
use std::str::FromStr;

/// A single inclusion or exclusion test applied to a word.
///
/// Whether a condition includes or excludes is decided by the list it is
/// passed in, not by the condition itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The word contains this text somewhere.
    Substring(String),
    /// The word has this character at this zero-based index.
    Positional(char, usize),
}

impl Condition {
    pub fn substring(text: impl Into<String>) -> Self {
        Condition::Substring(text.into())
    }

    pub fn at(letter: char, index: usize) -> Self {
        Condition::Positional(letter, index)
    }

    /// Checks that the condition can be evaluated against words of `word_len` characters.
    pub fn validate(&self, word_len: usize) -> Result<()> {
        match self {
            Condition::Substring(text) if text.is_empty() => Err(GuesserError::InvalidCondition(
                "substring condition must not be empty".to_string(),
            )),
            Condition::Substring(_) => Ok(()),
            Condition::Positional(letter, index) if *index >= word_len => {
                Err(GuesserError::InvalidCondition(format!(
                    "index {index} for '{letter}' is out of range for {word_len}-letter words"
                )))
            }
            Condition::Positional(..) => Ok(()),
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        match self {
            Condition::Substring(text) => word.contains(text.as_str()),
            Condition::Positional(letter, index) => word.chars().nth(*index) == Some(*letter),
        }
    }
}

impl From<&str> for Condition {
    fn from(text: &str) -> Self {
        Condition::Substring(text.to_string())
    }
}

impl From<(char, usize)> for Condition {
    fn from((letter, index): (char, usize)) -> Self {
        Condition::Positional(letter, index)
    }
}

/// Parses `C@i` (one character, `@`, decimal digits) as a positional
/// condition and any other text as a substring, so `a@b` is the substring "a@b".
impl FromStr for Condition {
    type Err = GuesserError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GuesserError::InvalidCondition(
                "condition must not be empty".to_string(),
            ));
        }

        let positional = s
            .rsplit_once('@')
            .filter(|(_, index)| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()));
        let Some((letter, index)) = positional else {
            return Ok(Condition::Substring(s.to_string()));
        };

        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(GuesserError::InvalidCondition(format!(
                "'{s}': a positional condition needs exactly one character before '@'"
            )));
        };
        let index = index.parse::<usize>().map_err(|_| {
            GuesserError::InvalidCondition(format!("'{s}': the index after '@' is too large"))
        })?;

        Ok(Condition::Positional(letter, index))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Substring(text) => write!(f, "{text}"),
            Condition::Positional(letter, index) => write!(f, "{letter}@{index}"),
        }
    }
}
