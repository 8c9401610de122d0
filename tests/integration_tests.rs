// Integration tests for the wordle-guesser library
// These tests verify that loading, length resolution, filtering and sampling work together

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::{Cursor, empty, sink};
use wordle_guesser::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_end_to_end_file_to_guess() {
    // Load a word list from disk, filter it, and draw a guess from the result
    let path = std::env::temp_dir().join("wordle_guesser_integration_e2e.txt");
    fs::write(&path, "crane\nslate\ntrace\nplace\ngrace\nsassy\n").unwrap();

    let config = GuesserConfig::with_path(&path);
    let mut prompt = CliLengthPrompt::new(empty(), sink());
    let guesser = Guesser::from_config(config, &mut prompt).unwrap();
    assert_eq!(guesser.word_len(), 5);
    assert_eq!(guesser.words().len(), 6);

    let pool = guesser
        .find_candidates(&[Condition::substring("ace")], &[Condition::at('t', 0)])
        .unwrap();
    assert_eq!(&*pool, &["place", "grace"]);

    let mut rng = StdRng::seed_from_u64(3);
    let guess = guesser.random_guess_with(&pool, 1, &mut rng).unwrap();
    assert!(pool.contains(&guess[0]));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_mixed_length_file_is_trimmed_after_prompt() {
    // A heterogeneous list must be reduced to one length class before filtering
    let path = std::env::temp_dir().join("wordle_guesser_integration_mixed.txt");
    fs::write(&path, "apple\nangle\ncat\nhouse\nrat\nplanet\n").unwrap();

    let config = GuesserConfig::with_path(&path);
    let mut prompt = CliLengthPrompt::new(Cursor::new("six\n7\n5\n"), Vec::new());
    let guesser = Guesser::from_config(config, &mut prompt).unwrap();

    assert_eq!(guesser.word_len(), 5);
    assert_eq!(guesser.words(), &["apple", "angle", "house"]);

    let output = String::from_utf8(prompt.into_writer()).unwrap();
    assert!(output.contains("3 types of length are found"));
    assert!(output.contains("Word length must be an integer!"));
    assert!(output.contains("The word length 7 is not available"));
    assert!(output.contains("Before: 6"));
    assert!(output.contains("Now: 3"));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_conjunction_of_conditions() {
    // Every inclusion must hold and every exclusion must fail, whatever the order
    let corpus = words(&["crane", "crate", "trace", "react", "caret", "cater"]);
    let guesser = Guesser::new(corpus.clone()).unwrap();

    let include = vec![Condition::substring("c"), Condition::at('r', 1)];
    let exclude = vec![Condition::substring("n"), Condition::at('t', 0)];
    let pool = guesser.find_candidates(&include, &exclude).unwrap();

    let expected: Vec<String> = corpus
        .iter()
        .filter(|w| include.iter().all(|c| c.matches(w)))
        .filter(|w| !exclude.iter().any(|c| c.matches(w)))
        .cloned()
        .collect();
    assert_eq!(pool.clone().into_words(), expected);
    assert_eq!(&*pool, &["crate"]);

    let reversed = guesser
        .find_candidates(
            &include.iter().rev().cloned().collect::<Vec<_>>(),
            &exclude.iter().rev().cloned().collect::<Vec<_>>(),
        )
        .unwrap();
    assert_eq!(reversed, pool);
}

#[test]
fn test_narrowing_across_queries() {
    // Adding conditions can only shrink the candidate pool
    let guesser = Guesser::new(words(&["crane", "slate", "raise", "stare", "arise", "irate"])).unwrap();

    let broad = guesser.query().include("a").run().unwrap();
    let narrower = guesser.query().include("a").include(('e', 4_usize)).run().unwrap();
    let narrowest = guesser
        .query()
        .include("a")
        .include(('e', 4_usize))
        .exclude("r")
        .run()
        .unwrap();

    assert!(broad.len() <= guesser.words().len());
    assert!(narrower.len() <= broad.len());
    assert!(narrowest.len() <= narrower.len());
    assert_eq!(&*narrowest, &["slate"]);
}

#[test]
fn test_exclusive_and_guess_bounds() {
    // Guesses only come from words with no repeated letters
    let guesser = Guesser::new(words(&["apple", "angle", "ankle", "adobe", "llama"])).unwrap();
    let pool = guesser.query().include(('a', 0_usize)).run().unwrap();

    let exclusive = guesser.exclusive(Some(&*pool));
    assert_eq!(exclusive, vec!["angle", "ankle", "adobe"]);
    assert_eq!(guesser.exclusive(Some(exclusive.as_slice())), exclusive);

    let all = guesser.random_guess(&pool, 4).unwrap();
    assert_eq!(all, exclusive);

    let mut rng = StdRng::seed_from_u64(11);
    let two = guesser.random_guess_with(&pool, 2, &mut rng).unwrap();
    assert_eq!(two.len(), 2);
    assert_ne!(two[0], two[1]);
    assert!(two.iter().all(|w| exclusive.contains(w)));
}

#[test]
fn test_error_taxonomy() {
    // Each misuse surfaces as its own error kind
    let guesser = Guesser::new(words(&["apple", "angle"])).unwrap();

    assert!(matches!(
        guesser.find_candidates(&[], &[]),
        Err(GuesserError::Usage(_))
    ));
    assert!(matches!(
        guesser.find_candidates(&[Condition::at('a', 7)], &[]),
        Err(GuesserError::InvalidCondition(_))
    ));
    assert!(matches!(
        "ab@1".parse::<Condition>(),
        Err(GuesserError::InvalidCondition(_))
    ));

    let repeating = guesser.query().include("pp").run().unwrap();
    assert!(matches!(
        guesser.random_guess(&repeating, 1),
        Err(GuesserError::EmptyPool)
    ));

    let missing = std::env::temp_dir().join("wordle_guesser_integration_missing.txt");
    let _ = fs::remove_file(&missing);
    let mut prompt = CliLengthPrompt::new(empty(), sink());
    assert!(matches!(
        Guesser::from_config(GuesserConfig::with_path(&missing), &mut prompt),
        Err(GuesserError::Config(_))
    ));
}

#[test]
fn test_wordbank_from_str_feeds_guesser() {
    // Loading from a string trims whitespace and skips blank lines
    let data = "  crane\nslate  \n\nraise\r\n";
    let guesser = Guesser::new(load_words_from_str(data)).unwrap();
    assert_eq!(guesser.words(), &["crane", "slate", "raise"]);
    assert!(guesser.words().iter().all(|w| is_exclusive(w)));
}
