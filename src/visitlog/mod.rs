//! In-memory patient visit log
//!
//! Patients are keyed by their full name; each has an append-only list of
//! visits (doctor specialization + calendar date). The log is driven by a
//! menu loop with four commands: `Save`, `GetHistory`, `GetLastVisit` and
//! `Exit`. Nothing is persisted: the history lives as long as the process.

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod store;
pub mod types;

pub use command::{Command, UnknownCommand};
pub use dispatcher::{Dispatcher, Flow};
pub use error::VisitLogError;
pub use store::{VisitHistory, VisitStore};
pub use types::{parse_date, Doctor, Patient, Visit};

use crate::error::UtilityError;
use crate::input::Prompter;
use std::io::{BufRead, Write};

/// Run a visit log session on a fresh in-memory history
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<VisitHistory, UtilityError> {
    let mut dispatcher = Dispatcher::new(VisitHistory::new());
    dispatcher.run(prompter)?;
    Ok(dispatcher.into_store())
}
