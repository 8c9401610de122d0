use crate::condition::Condition;
use crate::config::GuesserConfig;
use crate::error::{GuesserError, Result};
use crate::length::{LengthPrompt, length_distribution, resolve_and_trim, trim_to_length};
use crate::wordbank::load_words_from_file;
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::ops::Deref;

/// Words left after a call to [`Guesser::find_candidates`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidatePool(Vec<String>);

impl CandidatePool {
    pub fn into_words(self) -> Vec<String> {
        self.0
    }
}

impl Deref for CandidatePool {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// True when no character repeats within `word`.
pub fn is_exclusive(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars().all(|c| seen.insert(c))
}

/// Candidate filter over a corpus of equally long words.
#[derive(Clone, Debug)]
pub struct Guesser {
    words: Vec<String>,
    word_len: usize,
}

impl Guesser {
    /// Builds a guesser from words that already share one length.
    ///
    /// Mixed lengths are rejected here; use [`Guesser::from_config`] to have
    /// them resolved through a prompt.
    pub fn new(words: Vec<String>) -> Result<Self> {
        let distribution = length_distribution(&words);
        let mut lengths = distribution.keys();
        match (lengths.next(), lengths.next()) {
            (None, _) => Err(GuesserError::Config("the word list is empty".to_string())),
            (Some(&word_len), None) => Ok(Self { words, word_len }),
            _ => Err(GuesserError::Config(format!(
                "the word list mixes {} word lengths: {:?}",
                distribution.len(),
                distribution.keys().collect::<Vec<_>>()
            ))),
        }
    }

    /// Loads words per `config`, then settles on a single word length.
    ///
    /// A pre-selected `config.length` wins over the prompt. The prompt is only
    /// consulted when the words come in more than one length.
    pub fn from_config<P: LengthPrompt + ?Sized>(
        config: GuesserConfig,
        prompt: &mut P,
    ) -> Result<Self> {
        let words = match config.words {
            Some(words) if words.is_empty() => {
                return Err(GuesserError::Config(
                    "the explicit word list is empty".to_string(),
                ));
            }
            Some(words) => words,
            None => load_words_from_file(config.resolved_words_path())?,
        };

        let distribution = length_distribution(&words);
        let words = match config.length {
            Some(length) if !distribution.contains_key(&length) => {
                return Err(GuesserError::Config(format!(
                    "word length {length} is not available in the word list"
                )));
            }
            Some(length) => trim_to_length(words, length),
            None if distribution.len() > 1 => resolve_and_trim(words, prompt)?,
            None => words,
        };

        let guesser = Self::new(words)?;
        info_log!(
            "Guesser ready with {} words of length {}",
            guesser.words.len(),
            guesser.word_len
        );
        Ok(guesser)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Keeps the words satisfying every `include` condition and none of the `exclude` ones.
    ///
    /// At least one condition must be given. All conditions are validated
    /// against the corpus word length before any filtering happens.
    pub fn find_candidates(
        &self,
        include: &[Condition],
        exclude: &[Condition],
    ) -> Result<CandidatePool> {
        if include.is_empty() && exclude.is_empty() {
            return Err(GuesserError::Usage(
                "no inclusion or exclusion conditions were given".to_string(),
            ));
        }
        for cond in include.iter().chain(exclude) {
            cond.validate(self.word_len)?;
        }

        let mut pool = self.words.clone();
        for cond in include {
            pool.retain(|word| cond.matches(word));
        }
        for cond in exclude {
            pool.retain(|word| !cond.matches(word));
        }
        debug_log!(
            "find_candidates: {} include, {} exclude -> {} of {} words",
            include.len(),
            exclude.len(),
            pool.len(),
            self.words.len()
        );
        Ok(CandidatePool(pool))
    }

    /// Shorthand builder for [`Guesser::find_candidates`].
    pub fn query(&self) -> Query<'_> {
        Query {
            guesser: self,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Words from `words` (the whole corpus when `None`) with no repeated character.
    pub fn exclusive(&self, words: Option<&[String]>) -> Vec<String> {
        words
            .unwrap_or(&self.words)
            .iter()
            .filter(|word| is_exclusive(word))
            .cloned()
            .collect()
    }

    /// Draws up to `out_num` exclusive words from `pool` with the thread RNG.
    ///
    /// Always returns a list, even for `out_num == 1`; use
    /// [`Guesser::random_guess_one`] for a single word.
    pub fn random_guess(&self, pool: &CandidatePool, out_num: usize) -> Result<Vec<String>> {
        self.random_guess_with(pool, out_num, &mut rand::thread_rng())
    }

    pub fn random_guess_one(&self, pool: &CandidatePool) -> Result<String> {
        self.random_guess_one_with(pool, &mut rand::thread_rng())
    }

    /// One uniformly drawn exclusive word from `pool`, or [`GuesserError::EmptyPool`].
    pub fn random_guess_one_with<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool,
        rng: &mut R,
    ) -> Result<String> {
        self.exclusive(Some(&**pool))
            .choose(rng)
            .cloned()
            .ok_or(GuesserError::EmptyPool)
    }

    /// Draws `out_num` distinct exclusive words from `pool`.
    ///
    /// Asking for more words than there are exclusive candidates returns all
    /// of them in pool order. Asking for exactly one from an empty exclusive
    /// pool is an error.
    pub fn random_guess_with<R: Rng + ?Sized>(
        &self,
        pool: &CandidatePool,
        out_num: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        if out_num == 1 {
            return self.random_guess_one_with(pool, rng).map(|word| vec![word]);
        }
        let exclusive = self.exclusive(Some(&**pool));
        if out_num > exclusive.len() {
            return Ok(exclusive);
        }
        Ok(exclusive.choose_multiple(rng, out_num).cloned().collect())
    }
}

/// Accumulates conditions one at a time before running them.
pub struct Query<'a> {
    guesser: &'a Guesser,
    include: Vec<Condition>,
    exclude: Vec<Condition>,
}

impl Query<'_> {
    pub fn include(mut self, cond: impl Into<Condition>) -> Self {
        self.include.push(cond.into());
        self
    }

    pub fn exclude(mut self, cond: impl Into<Condition>) -> Self {
        self.exclude.push(cond.into());
        self
    }

    pub fn run(&self) -> Result<CandidatePool> {
        self.guesser.find_candidates(&self.include, &self.exclude)
    }
}
