use clap::Parser;
use crate::condition::Condition;
use crate::config::GuesserConfig;
use crate::error::{GuesserError, Result};
use crate::guesser::Guesser;
use crate::length::CliLengthPrompt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Wordle Guesser CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to wordle_wl.txt)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Inclusion condition: text the word must contain, or C@i for letter C at index i
    #[arg(short = 'I', long = "include", value_name = "COND", value_parser = parse_condition)]
    pub include: Vec<Condition>,

    /// Exclusion condition, same syntax as --include
    #[arg(short = 'E', long = "exclude", value_name = "COND", value_parser = parse_condition)]
    pub exclude: Vec<Condition>,

    /// Number of random guesses to draw from candidates with no repeated letters
    #[arg(short = 'n', long = "guesses", default_value_t = 0)]
    pub guesses: usize,

    /// Only list candidates with no repeated letters
    #[arg(short = 'x', long = "exclusive")]
    pub exclusive: bool,

    /// Word length to use when the list mixes lengths, instead of prompting
    #[arg(short = 'l', long = "length")]
    pub length: Option<usize>,

    /// Seed for reproducible guesses
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

// clap would otherwise pick `From<&str>` over `FromStr` and never see `C@i`
fn parse_condition(s: &str) -> Result<Condition> {
    s.parse()
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn config(&self) -> GuesserConfig {
        let mut config = match &self.wordbank_path {
            Some(path) => GuesserConfig::with_path(path.clone()),
            None => GuesserConfig::default(),
        };
        config.length = self.length;
        config
    }

    fn has_conditions(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }
}

/// Loads the word list, runs the query and prints the result to `writer`.
///
/// `reader` answers the word length prompt when the list mixes lengths.
pub fn run<R: BufRead, W: Write>(cli: &Cli, reader: R, writer: &mut W) -> Result<()> {
    let guesser = {
        let mut prompt = CliLengthPrompt::new(reader, &mut *writer);
        Guesser::from_config(cli.config(), &mut prompt)?
    };

    if !cli.has_conditions() {
        if cli.guesses > 0 {
            return Err(GuesserError::Usage(
                "guesses are drawn from candidates; give conditions with --include/--exclude"
                    .to_string(),
            ));
        }
        display_loaded(writer, &guesser)?;
        return Ok(());
    }

    let pool = guesser.find_candidates(&cli.include, &cli.exclude)?;
    if cli.exclusive {
        display_candidates(writer, &guesser.exclusive(Some(&*pool)))?;
    } else {
        display_candidates(writer, &pool)?;
    }

    if cli.guesses > 0 {
        let drawn = match cli.seed {
            Some(seed) => {
                guesser.random_guess_with(&pool, cli.guesses, &mut StdRng::seed_from_u64(seed))
            }
            None => guesser.random_guess(&pool, cli.guesses),
        };
        // An empty exclusive pool reads the same whatever the number asked for
        let guesses = match drawn {
            Err(GuesserError::EmptyPool) => Vec::new(),
            other => other?,
        };
        display_guesses(writer, &guesses)?;
    }
    Ok(())
}

pub fn display_loaded<W: Write>(writer: &mut W, guesser: &Guesser) -> Result<()> {
    writeln!(
        writer,
        "Loaded {} words of length {}.",
        guesser.words().len(),
        guesser.word_len()
    )?;
    writeln!(
        writer,
        "Give conditions with --include/--exclude to find candidates."
    )?;
    Ok(())
}

pub fn display_candidates<W: Write>(writer: &mut W, candidates: &[String]) -> Result<()> {
    writeln!(writer, "Possible candidates ({})", candidates.len())?;
    for word in candidates {
        writeln!(writer, "{word}")?;
    }
    if candidates.is_empty() {
        writeln!(writer, "No candidates remain. Check your conditions.")?;
    }
    Ok(())
}

pub fn display_guesses<W: Write>(writer: &mut W, guesses: &[String]) -> Result<()> {
    match guesses {
        [] => writeln!(writer, "No guess available.")?,
        [guess] => writeln!(writer, "Suggested guess: {guess}")?,
        _ => writeln!(writer, "Suggested guesses: {}", guesses.join(", "))?,
    }
    Ok(())
}
