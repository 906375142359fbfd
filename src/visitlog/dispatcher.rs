//! Command loop of the visit log
//!
//! One `step` shows the menu, reads a command and runs it against the store.
//! Command failures are reported and leave the store untouched; only a broken
//! input stream at the menu ends the loop with an error.

use super::command::Command;
use super::error::VisitLogError;
use super::store::VisitStore;
use super::types::{parse_date, Doctor, Patient, Visit};
use crate::error::UtilityError;
use crate::input::{InputError, Prompter};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const SEPARATOR: &str = "--------------";
const MENU: &str = "Input command:\n- Save\n- GetHistory\n- GetLastVisit\n- Exit:";
const COMMAND_RETRY: &str = "Invalid input. Please give me correct command: ";
const PATIENT_PROMPT: &str = "Input patient full name: ";
const DOCTOR_PROMPT: &str = "Input doctor's specialization: ";
const DATE_PROMPT: &str = "Input date in format\"YYYY-MM-DD\": ";
const FAREWELL: &str = "Good bye!";

/// What the loop should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs menu commands against a visit store
pub struct Dispatcher<S> {
    store: S,
}

impl<S: VisitStore> Dispatcher<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Loop until `Exit`, then say goodbye
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), UtilityError> {
        while let Flow::Continue = self.step(prompter)? {}
        prompter.say_line(FAREWELL).map_err(InputError::from)?;
        Ok(())
    }

    /// Show the menu, read one command and execute it
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Flow, InputError> {
        let command = read_command(prompter)?;
        debug!("Dispatching {} command", command);

        let outcome = match command {
            Command::Save => self.save(prompter),
            Command::GetHistory => self.show_history(prompter),
            Command::GetLastVisit => self.show_last_visit(prompter),
            Command::Exit => return Ok(Flow::Exit),
        };

        if let Err(err) = outcome {
            warn!("{} command aborted: {}", command, err);
            prompter.say_line(err.report())?;
        }
        Ok(Flow::Continue)
    }

    fn save<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), VisitLogError> {
        let patient = Patient::new(prompter.ask(PATIENT_PROMPT)?)?;
        let doctor = Doctor::new(prompter.ask(DOCTOR_PROMPT)?)?;
        let date = parse_date(&prompter.ask(DATE_PROMPT)?)?;

        debug!("Saving visit of {} to {} on {}", patient, doctor, date);
        self.store.record(patient, Visit::new(doctor, date));
        info!("Visit saved, {} patients on file", self.store.patient_count());
        Ok(())
    }

    fn show_history<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), VisitLogError> {
        let patient = Patient::new(prompter.ask(PATIENT_PROMPT)?)?;
        let visits = self
            .store
            .history(&patient)
            .ok_or(VisitLogError::UserNotFound)?;

        for visit in visits {
            prompter
                .say_line(&visit.to_string())
                .map_err(InputError::from)?;
        }
        Ok(())
    }

    fn show_last_visit<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), VisitLogError> {
        let patient = Patient::new(prompter.ask(PATIENT_PROMPT)?)?;
        if self.store.history(&patient).is_none() {
            return Err(VisitLogError::UserNotFound);
        }

        let doctor = Doctor::new(prompter.ask(DOCTOR_PROMPT)?)?;
        let visit = self
            .store
            .last_visit(&patient, &doctor)
            .ok_or(VisitLogError::UserNotFound)?;

        prompter
            .say_line(&visit.to_string())
            .map_err(InputError::from)?;
        Ok(())
    }
}

/// Show the menu and re-read until a known command arrives
fn read_command<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Command, InputError> {
    prompter.say_line(SEPARATOR)?;
    prompter.say_line(MENU)?;
    prompter.ask_until("", COMMAND_RETRY, |line| line.parse::<Command>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::{output, scripted, scripted_bytes};
    use crate::visitlog::store::VisitHistory;

    fn session(lines: &[&str]) -> (Result<(), UtilityError>, VisitHistory, String) {
        let mut prompter = scripted(lines);
        let mut dispatcher = Dispatcher::new(VisitHistory::new());
        let result = dispatcher.run(&mut prompter);
        (result, dispatcher.into_store(), output(prompter))
    }

    #[test]
    fn test_save_then_history() {
        let (result, store, out) = session(&[
            "save",
            "Max Payne",
            "Surgery",
            "2025-01-01",
            "gethistory",
            "Max Payne",
            "exit",
        ]);
        assert!(result.is_ok());
        assert_eq!(store.patient_count(), 1);
        assert!(out.contains("Surgery  2025-01-01\n"));
        assert!(out.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_history_lists_in_saved_order() {
        let (_, _, out) = session(&[
            "save", "Ann", "Dentist", "2025-03-01",
            "save", "Ann", "Surgery", "2024-01-01",
            "gethistory", "Ann",
            "exit",
        ]);
        let dentist = out.find("Dentist  2025-03-01").unwrap();
        let surgery = out.find("Surgery  2024-01-01").unwrap();
        assert!(dentist < surgery);
    }

    #[test]
    fn test_last_visit_returns_later_date() {
        let (_, _, out) = session(&[
            "save", "Ann", "Surgery", "2025-03-01",
            "save", "Ann", "Surgery", "2024-01-01",
            "getlastvisit", "Ann", "Surgery",
            "exit",
        ]);
        assert!(out.contains("Surgery  2025-03-01\n"));
        assert!(!out.contains("Surgery  2024-01-01"));
    }

    #[test]
    fn test_unknown_patient_is_reported() {
        let (result, _, out) = session(&[
            "gethistory", "Nobody",
            "getlastvisit", "Nobody",
            "exit",
        ]);
        assert!(result.is_ok());
        assert_eq!(out.matches("user not found\n").count(), 2);
        // doctor is never asked for an unknown patient
        assert!(!out.contains(DOCTOR_PROMPT));
    }

    #[test]
    fn test_last_visit_unknown_doctor_is_reported() {
        let (_, _, out) = session(&[
            "save", "Ann", "Surgery", "2025-03-01",
            "getlastvisit", "Ann", "Dentist",
            "exit",
        ]);
        assert!(out.contains("user not found\n"));
    }

    #[test]
    fn test_bad_date_stores_nothing() {
        let (result, store, out) = session(&[
            "save", "Ann", "Surgery", "2025-1-1",
            "gethistory", "Ann",
            "exit",
        ]);
        assert!(result.is_ok());
        assert_eq!(store.patient_count(), 0);
        assert!(out.contains("Incorrect input date value\n"));
        assert!(out.contains("user not found\n"));
    }

    #[test]
    fn test_empty_field_aborts_command() {
        let (_, store, out) = session(&["save", "", "exit"]);
        assert_eq!(store.patient_count(), 0);
        assert!(out.contains("Input empty string\n"));
        assert!(!out.contains(DOCTOR_PROMPT));
    }

    #[test]
    fn test_invalid_command_reprompts() {
        let (result, _, out) = session(&["hello", "list", "EXIT"]);
        assert!(result.is_ok());
        assert_eq!(out.matches(COMMAND_RETRY).count(), 2);
        assert_eq!(out.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn test_invalid_utf8_command_reprompts() {
        let mut prompter = scripted_bytes(b"sav\xff\nexit\n");
        let mut dispatcher = Dispatcher::new(VisitHistory::new());
        assert!(dispatcher.run(&mut prompter).is_ok());
        let out = output(prompter);
        assert_eq!(out.matches(COMMAND_RETRY).count(), 1);
        assert!(out.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_invalid_utf8_name_is_stored_as_text() {
        let mut prompter =
            scripted_bytes(b"save\nAnn\xff\nSurgery\n2025-01-01\nexit\n");
        let mut dispatcher = Dispatcher::new(VisitHistory::new());
        assert!(dispatcher.run(&mut prompter).is_ok());
        let store = dispatcher.into_store();
        assert!(store
            .history(&Patient::new("Ann\u{FFFD}").unwrap())
            .is_some());
    }

    #[test]
    fn test_closed_stream_at_menu_is_fatal() {
        let (result, _, out) = session(&["save", "Ann"]);
        let err = result.unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::INPUT_CLOSED);
        // the interrupted save is reported before the menu read fails
        assert!(out.contains("input error\n"));
        assert!(!out.contains(FAREWELL));
    }

    #[test]
    fn test_step_returns_exit() {
        let mut prompter = scripted(&["exit"]);
        let mut dispatcher = Dispatcher::new(VisitHistory::new());
        assert_eq!(dispatcher.step(&mut prompter).unwrap(), Flow::Exit);
    }
}
