//! Four-operation calculator
//!
//! Reads a left operand, an operator and a right operand, one per line, and
//! prints the result rounded to three decimal places.

use crate::error::{ErrorCode, UtilityError};
use crate::input::{InputError, Prompter};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const LEFT_PROMPT: &str = "Input left operand: ";
const OPERATOR_PROMPT: &str = "Input one of operations  + - * /: ";
const RIGHT_PROMPT: &str = "Input right operand: ";
const OPERAND_RETRY: &str = "Invalid input. Please give me correct operand: ";
const OPERATOR_RETRY: &str = "Invalid input. Please give me correct operator (+, -, *, /): ";

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unfortunately you can't divide by zero :-(")]
    DivideByZero,

    #[error("unknown operation")]
    UnknownOperation(String),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl From<CalcError> for UtilityError {
    fn from(err: CalcError) -> Self {
        let message = err.to_string();
        match err {
            CalcError::Input(input) => input.into(),
            CalcError::DivideByZero => {
                UtilityError::domain_with_code(ErrorCode::DOMAIN_DIVIDE_BY_ZERO, message)
            }
            CalcError::UnknownOperation(symbol) => {
                UtilityError::domain_with_code(ErrorCode::DOMAIN_UNKNOWN_OPERATION, message)
                    .with_context(format!("'{symbol}'"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply the operator and round to three decimals
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        let raw = match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => {
                if right == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                left / right
            }
        };
        Ok(round3(raw))
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Exactly one operator character, nothing else
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(CalcError::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Round half away from zero at the third decimal
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Evaluate `left <symbol> right`
///
/// Any symbol outside `+ - * /` is rejected with `CalcError::UnknownOperation`,
/// even though the interactive parser never produces one.
pub fn evaluate(left: f64, symbol: char, right: f64) -> Result<f64, CalcError> {
    Operator::try_from(symbol)?.apply(left, right)
}

pub fn parse_operand<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> Result<f64, CalcError> {
    Ok(prompter.ask_until(prompt, OPERAND_RETRY, |s| s.parse::<f64>().ok())?)
}

pub fn parse_operator<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Operator, CalcError> {
    Ok(prompter.ask_until(OPERATOR_PROMPT, OPERATOR_RETRY, |s| {
        s.parse::<Operator>().ok()
    })?)
}

/// Run one calculation session
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<f64, UtilityError> {
    let left = parse_operand(prompter, LEFT_PROMPT)?;
    let operator = parse_operator(prompter)?;
    let right = parse_operand(prompter, RIGHT_PROMPT)?;
    debug!("Evaluating {} {} {}", left, operator, right);

    let result = evaluate(left, operator.symbol(), right)?;
    prompter
        .say_line(&format!("Result: {result}"))
        .map_err(InputError::from)?;
    Ok(result)
}
