//! # Smart Utilities
//!
//! Small, independent console utilities that read line-oriented answers from
//! standard input and print their results to standard output.
//!
//! ## Binaries
//!
//! ```bash
//! calculator      # two operands and one of + - * /
//! slicecrossing   # order-preserving intersection of two integer lines
//! wordfreq        # top-K most frequent words of a line
//! visitlog        # in-memory patient visit log driven by a menu
//! ```
//!
//! ## Modules
//!
//! - `app` - Shared CLI flags, configuration, logging and fatal error handling
//! - `calculator` - Arithmetic evaluator with three-decimal rounding
//! - `config` - Optional settings file and environment overrides
//! - `error` - Unified error type and error code registry
//! - `input` - Line reader and re-prompting prompter
//! - `slicecrossing` - Integer sequence intersection
//! - `visitlog` - Visit store, commands and the command dispatcher
//! - `wordfreq` - Word frequency ranking
pub mod app;
pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod slicecrossing;
pub mod visitlog;
pub mod wordfreq;
