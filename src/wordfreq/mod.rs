//! Word frequency ranking
//!
//! Tokens are whitespace-separated and compared exactly: case and punctuation
//! both matter. Tokens with equal counts keep the order in which they first
//! appeared in the text.

use crate::error::UtilityError;
use crate::input::{InputError, Prompter};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::debug;

const TEXT_PROMPT: &str = "Input a string with some words with space between it: ";
const K_PROMPT: &str = "Input number of unique words to show: ";
const K_RETRY: &str = "Invalid input. Please give me correct K value: ";

pub type Word = String;

/// Distinct tokens with their counts, in first-occurrence order
pub fn word_counts(text: &str) -> Vec<(Word, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(Word, usize)> = Vec::new();

    for token in text.split_whitespace() {
        match index.get(token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token.to_string(), 1));
            }
        }
    }

    counts
}

/// The `k` most frequent tokens, most frequent first
///
/// Ties keep first-occurrence order. Fewer than `k` tokens are returned when
/// the text has fewer distinct tokens.
pub fn top_k(text: &str, k: usize) -> Vec<Word> {
    let mut counts = word_counts(text);
    // stable: equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(k).map(|(word, _)| word).collect()
}

/// Accept strictly positive integers
pub fn parse_k(input: &str) -> Option<usize> {
    input.parse::<usize>().ok().filter(|&k| k > 0)
}

/// Run one ranking session
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<Word>, UtilityError> {
    let text = prompter.ask(TEXT_PROMPT)?;
    let k = prompter.ask_until(K_PROMPT, K_RETRY, parse_k)?;

    let words = top_k(&text, k);
    debug!("Top {} of {} distinct words", words.len(), word_counts(&text).len());

    prompter
        .say_line(&format!("Result: {}", words.join(" ")))
        .map_err(InputError::from)?;
    Ok(words)
}
