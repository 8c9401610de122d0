use crate::error::{GuesserError, Result};
use crate::info_log;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_WORDS_PATH: &str = "wordle_wl.txt";

/// The word on a line, or `None` for a blank line.
fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim();
    (!word.is_empty()).then(|| word.to_string())
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

/// Reads one word per line, stripping surrounding whitespace and skipping blank lines.
///
/// A missing file is a configuration problem rather than a plain I/O failure.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GuesserError::Config(format!(
            "{} does not exist. Please specify a path to a word list stored in txt format \
             where every line corresponds to a word",
            path.display()
        )));
    }

    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(normalize_line(&line?));
    }
    info_log!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
