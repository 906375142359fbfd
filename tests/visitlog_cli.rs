//! Integration tests for the visitlog binary

mod common;

use common::{lines, utility};
use predicates::prelude::*;

#[test]
fn test_save_and_history_scenario() {
    utility("visitlog")
        .write_stdin(lines(&[
            "save",
            "Max Payne",
            "Surgery",
            "2025-01-01",
            "gethistory",
            "Max Payne",
            "exit",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Surgery  2025-01-01\n"))
        .stdout(predicate::str::contains("Good bye!\n"));
}

#[test]
fn test_menu_is_shown() {
    utility("visitlog")
        .write_stdin(lines(&["Exit"]))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "--------------\nInput command:\n- Save\n- GetHistory\n- GetLastVisit\n- Exit:\n",
        ));
}

#[test]
fn test_last_visit_is_latest() {
    utility("visitlog")
        .write_stdin(lines(&[
            "SAVE", "Mona Sax", "Cardiology", "2024-05-10",
            "save", "Mona Sax", "Cardiology", "2025-02-01",
            "save", "Mona Sax", "Cardiology", "2023-12-31",
            "GetLastVisit", "Mona Sax", "Cardiology",
            "exit",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Cardiology  2025-02-01\n"));
}

#[test]
fn test_unknown_patient_is_not_fatal() {
    utility("visitlog")
        .write_stdin(lines(&["gethistory", "Nobody", "getlastvisit", "Nobody", "exit"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("user not found\n").count(2));
}

#[test]
fn test_bad_date_returns_to_menu() {
    utility("visitlog")
        .write_stdin(lines(&["save", "Max Payne", "Surgery", "01/01/2025", "exit"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect input date value\n"))
        .stdout(predicate::str::contains("--------------").count(2));
}

#[test]
fn test_end_of_input_without_exit_fails() {
    utility("visitlog")
        .write_stdin(lines(&["save", "Max Payne"]))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Good bye!").not());
}

#[test]
fn test_invalid_utf8_command_is_reprompted() {
    utility("visitlog")
        .write_stdin(b"sav\xff\nexit\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please give me correct command: ",
        ))
        .stdout(predicate::str::contains("Good bye!\n"));
}
