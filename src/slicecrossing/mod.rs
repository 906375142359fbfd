//! Order-preserving intersection of two integer sequences

use crate::error::{ErrorCode, UtilityError};
use crate::input::{InputError, Prompter};
use std::collections::HashSet;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

const FIRST_PROMPT: &str = "Enter first slice of integers: ";
const SECOND_PROMPT: &str = "Enter second slice of integers: ";

pub type Num = i64;

#[derive(Debug, Error)]
pub enum SliceError {
    #[error("invalid input")]
    InvalidInput { token: String },

    #[error(transparent)]
    Input(#[from] InputError),
}

impl From<SliceError> for UtilityError {
    fn from(err: SliceError) -> Self {
        match err {
            SliceError::Input(input) => input.into(),
            SliceError::InvalidInput { token } => UtilityError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_NUMBER,
                "invalid input",
                None,
            )
            .with_context(format!("'{token}' is not an integer")),
        }
    }
}

/// Parse whitespace-separated decimal integers
pub fn parse_nums(line: &str) -> Result<Vec<Num>, SliceError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<Num>().map_err(|_| SliceError::InvalidInput {
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn read_nums<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> Result<Vec<Num>, SliceError> {
    let line = prompter.ask(prompt)?;
    parse_nums(&line)
}

/// Values of `first` that also occur in `second`, in `first`'s order
///
/// Each value is reported once: a match consumes the value, so repeats in
/// `first` are skipped. Returns the values and their count.
pub fn intersect(first: &[Num], second: &[Num]) -> (Vec<Num>, usize) {
    let mut pending: HashSet<Num> = second.iter().copied().collect();
    let common: Vec<Num> = first
        .iter()
        .copied()
        .filter(|num| pending.remove(num))
        .collect();
    let count = common.len();
    (common, count)
}

pub fn format_nums(nums: &[Num]) -> String {
    nums.iter()
        .map(|num| num.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run one intersection session
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<Num>, UtilityError> {
    let first = read_nums(prompter, FIRST_PROMPT)?;
    let second = read_nums(prompter, SECOND_PROMPT)?;

    let (common, count) = intersect(&first, &second);
    debug!(
        "Intersection of {} and {} values has {} values",
        first.len(),
        second.len(),
        count
    );

    let line = if count > 0 {
        format!("Result: {}", format_nums(&common))
    } else {
        "Result: Empty intersection".to_string()
    };
    prompter.say_line(&line).map_err(InputError::from)?;
    Ok(common)
}
