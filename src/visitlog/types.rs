//! Patient, doctor and visit records

use super::error::VisitLogError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Exact shape of an accepted date before calendar validation
static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Valid regex pattern"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A patient's full name, used verbatim as the lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Patient(String);

/// A doctor's specialization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Doctor(String);

macro_rules! non_empty_text {
    ($name:ident) => {
        impl $name {
            /// Build from trimmed text, rejecting blanks
            pub fn new(text: impl Into<String>) -> Result<Self, VisitLogError> {
                let text = text.into();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(VisitLogError::EmptyInput);
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

non_empty_text!(Patient);
non_empty_text!(Doctor);

/// One patient-doctor encounter, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub doctor: Doctor,
    pub date: NaiveDate,
}

impl Visit {
    pub fn new(doctor: Doctor, date: NaiveDate) -> Self {
        Self { doctor, date }
    }
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.doctor, self.date.format(DATE_FORMAT))
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, VisitLogError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(VisitLogError::EmptyInput);
    }
    let incorrect = || VisitLogError::IncorrectDate {
        value: input.to_string(),
    };
    if !DATE_REGEX.is_match(input) {
        return Err(incorrect());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| incorrect())
}
