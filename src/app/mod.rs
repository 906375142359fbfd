//! Application module
//!
//! Shared plumbing for the utility binaries:
//! - Command-line arguments common to every binary
//! - Configuration handling
//! - Logging setup
//! - Fatal error reporting

pub mod cli;
pub mod config;
pub mod error_handling;
pub mod logging;

pub use cli::{CommonArgs, RetryArgs};
pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
