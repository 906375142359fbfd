use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type shared by every utility binary
#[derive(Error, Debug)]
pub enum UtilityError {
    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] {message}")]
    Domain {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl UtilityError {
    /// Create an input error with default code
    pub fn input(message: impl Into<String>) -> Self {
        Self::input_with_code(ErrorCode::INPUT_GENERIC, message)
    }

    /// Create an input error with specific code
    pub fn input_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a validation error with default code
    pub fn validation(message: impl Into<String>) -> Self {
        Self::validation_with_code(ErrorCode::VALIDATION_GENERIC, message, None)
    }

    /// Create a validation error with specific code and field name
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a domain error with default code
    pub fn domain(message: impl Into<String>) -> Self {
        Self::domain_with_code(ErrorCode::DOMAIN_GENERIC, message)
    }

    /// Create a domain error with specific code
    pub fn domain_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Domain {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message, None)
    }

    /// Create a configuration error with specific code and file path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Input { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Domain { source: src, .. }
            | Self::Config { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Input { message, .. }
            | Self::Validation { message, .. }
            | Self::Domain { message, .. }
            | Self::Config { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } => 1,
            Self::Validation { .. } => 2,
            Self::Domain { .. } => 3,
            Self::Config { .. } => 4,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Input { code, .. }
            | Self::Validation { code, .. }
            | Self::Domain { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Input { message, .. } => message.clone(),
            Self::Validation { message, field, .. } => match field {
                Some(f) => format!("Invalid {}: {}", f, message),
                None => message.clone(),
            },
            Self::Domain { message, .. } => message.clone(),
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

impl From<toml::de::Error> for UtilityError {
    fn from(err: toml::de::Error) -> Self {
        UtilityError::config_with_code(
            ErrorCode::CONFIG_PARSE_ERROR,
            "Invalid TOML syntax",
            None,
        )
        .with_source(err)
    }
}
