//! Word length resolution for word lists with more than one length class.
//!
//! # State Machine
//! - `AskLength` → `ValidateInt` → `ValidateAvailable` → `Trimmed`
//! - `ValidateInt` falls back to `AskLength` on non-integer input
//! - `ValidateAvailable` falls back to `AskLength` on a length not in the list
//! - `Trimmed` is terminal

use crate::error::{GuesserError, Result};
use crate::{debug_log, info_log};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Word length → number of words of that length.
pub type LengthDistribution = BTreeMap<usize, usize>;

pub fn length_distribution(words: &[String]) -> LengthDistribution {
    let mut distribution = LengthDistribution::new();
    for word in words {
        *distribution.entry(word.chars().count()).or_insert(0) += 1;
    }
    distribution
}

pub fn trim_to_length(words: Vec<String>, length: usize) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| word.chars().count() == length)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LengthState {
    AskLength,
    ValidateInt(String),
    ValidateAvailable(usize),
    Trimmed(usize),
}

/// Why a step fell back to `AskLength`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    NotAnInteger(String),
    Unavailable(usize),
}

impl LengthState {
    /// Advances one of the validating states. `AskLength` needs input and
    /// `Trimmed` is terminal, so both are returned unchanged.
    pub fn step(self, distribution: &LengthDistribution) -> (LengthState, Option<Rejection>) {
        match self {
            LengthState::ValidateInt(raw) => match raw.trim().parse::<usize>() {
                Ok(length) => (LengthState::ValidateAvailable(length), None),
                Err(_) => (LengthState::AskLength, Some(Rejection::NotAnInteger(raw))),
            },
            LengthState::ValidateAvailable(length) if distribution.contains_key(&length) => {
                (LengthState::Trimmed(length), None)
            }
            LengthState::ValidateAvailable(length) => {
                (LengthState::AskLength, Some(Rejection::Unavailable(length)))
            }
            state => (state, None),
        }
    }
}

/// Source of answers for the length question.
pub trait LengthPrompt {
    /// Shows the length classes found in the word list.
    fn report_distribution(&mut self, distribution: &LengthDistribution);
    /// Asks for a length; `None` when no more input is available.
    fn ask_length(&mut self) -> Result<Option<String>>;
    fn report_rejection(&mut self, rejection: &Rejection);
    fn report_trimmed(&mut self, before: usize, after: usize);
}

/// Drives the state machine until a length available in `distribution` is chosen.
pub fn resolve_length<P: LengthPrompt + ?Sized>(
    distribution: &LengthDistribution,
    prompt: &mut P,
) -> Result<usize> {
    prompt.report_distribution(distribution);

    let mut state = LengthState::AskLength;
    loop {
        state = match state {
            LengthState::AskLength => match prompt.ask_length()? {
                Some(line) => LengthState::ValidateInt(line),
                None => {
                    return Err(GuesserError::Config(
                        "input ended before a word length was chosen".to_string(),
                    ));
                }
            },
            LengthState::Trimmed(length) => {
                info_log!("Resolved word length: {}", length);
                return Ok(length);
            }
            validating => {
                let (next, rejection) = validating.step(distribution);
                if let Some(rejection) = rejection {
                    debug_log!("Length input rejected: {:?}", rejection);
                    prompt.report_rejection(&rejection);
                }
                next
            }
        };
    }
}

/// Resolves the length interactively, then keeps only words of that length.
pub fn resolve_and_trim<P: LengthPrompt + ?Sized>(
    words: Vec<String>,
    prompt: &mut P,
) -> Result<Vec<String>> {
    let distribution = length_distribution(&words);
    let length = resolve_length(&distribution, prompt)?;
    let before = words.len();
    let trimmed = trim_to_length(words, length);
    prompt.report_trimmed(before, trimmed.len());
    Ok(trimmed)
}

/// Terminal implementation of [`LengthPrompt`] over any reader and writer.
pub struct CliLengthPrompt<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliLengthPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

// Write failures on the prompt are not fatal; only reading the answer is.
impl<R: BufRead, W: Write> LengthPrompt for CliLengthPrompt<R, W> {
    fn report_distribution(&mut self, distribution: &LengthDistribution) {
        let lengths: Vec<String> = distribution
            .iter()
            .map(|(length, count)| format!("{length} ({count} words)"))
            .collect();
        let _ = writeln!(
            self.writer,
            "The word list you gave is not equally long inside. {} types of length are found: {}",
            distribution.len(),
            lengths.join(", ")
        );
    }

    fn ask_length(&mut self) -> Result<Option<String>> {
        let _ = writeln!(self.writer, "\nPlease specify the word length for your game:");
        let _ = self.writer.flush();
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    fn report_rejection(&mut self, rejection: &Rejection) {
        let _ = match rejection {
            Rejection::NotAnInteger(_) => writeln!(self.writer, "Word length must be an integer!"),
            Rejection::Unavailable(length) => writeln!(
                self.writer,
                "The word length {length} is not available in the word list."
            ),
        };
    }

    fn report_trimmed(&mut self, before: usize, after: usize) {
        let _ = writeln!(
            self.writer,
            "Trimming your word list...\nBefore: {before}\nNow: {after}\nYour word list has been trimmed!"
        );
    }
}
