//! Visit log error types

use crate::error::{ErrorCode, UtilityError};
use crate::input::InputError;
use thiserror::Error;

/// Failures of a single visit log command
#[derive(Debug, Error)]
pub enum VisitLogError {
    #[error("empty input")]
    EmptyInput,

    #[error("incorrect date value")]
    IncorrectDate { value: String },

    #[error("user not found")]
    UserNotFound,

    #[error("input error")]
    Input(#[from] InputError),
}

impl VisitLogError {
    /// The line shown to the user when the command is abandoned
    pub fn report(&self) -> &'static str {
        match self {
            VisitLogError::EmptyInput => "Input empty string",
            VisitLogError::IncorrectDate { .. } => "Incorrect input date value",
            VisitLogError::UserNotFound => "user not found",
            VisitLogError::Input(_) => "input error",
        }
    }
}

impl From<VisitLogError> for UtilityError {
    fn from(err: VisitLogError) -> Self {
        let message = err.to_string();
        match err {
            VisitLogError::Input(input) => input.into(),
            VisitLogError::EmptyInput => {
                UtilityError::validation_with_code(ErrorCode::VALIDATION_EMPTY_FIELD, message, None)
            }
            VisitLogError::IncorrectDate { value } => UtilityError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_DATE,
                message,
                Some("date".to_string()),
            )
            .with_context(format!("'{value}'")),
            VisitLogError::UserNotFound => {
                UtilityError::domain_with_code(ErrorCode::DOMAIN_USER_NOT_FOUND, message)
            }
        }
    }
}
