//! Line-oriented console input
//!
//! Every utility talks to the user the same way: write a prompt, block on one
//! line of input, validate it. This module owns that interaction:
//! - `read_line`: read and trim a single line from any `BufRead`
//! - `Prompter`: a reader/writer pair with prompt and re-prompt helpers

use crate::error::{ErrorCode, UtilityError};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace};

/// Failures of the underlying input stream
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,

    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),

    #[error("no valid answer after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

impl From<InputError> for UtilityError {
    fn from(err: InputError) -> Self {
        let code = match &err {
            InputError::Closed => ErrorCode::INPUT_CLOSED,
            InputError::Read(_) => ErrorCode::INPUT_READ_FAILED,
            InputError::AttemptsExhausted { .. } => ErrorCode::INPUT_ATTEMPTS_EXHAUSTED,
        };
        UtilityError::input_with_code(code, err.to_string()).with_source(err)
    }
}

/// Read one line and trim surrounding whitespace
///
/// Returns `InputError::Closed` when the stream ends before any byte is read.
/// A last line without a trailing newline is still returned. Invalid UTF-8 is
/// replaced with U+FFFD so the line reaches validation like any other text.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut buf = Vec::new();
    let bytes = reader.read_until(b'\n', &mut buf)?;
    if bytes == 0 {
        return Err(InputError::Closed);
    }
    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}

/// Prompt/answer session over a reader and a writer
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: None,
        }
    }

    /// Limit how many invalid answers `ask_until` tolerates
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Write text without a newline and flush it
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    /// Write a full line
    pub fn say_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    /// Read a line without prompting
    pub fn read(&mut self) -> Result<String, InputError> {
        let line = read_line(&mut self.reader)?;
        trace!("Read line: {:?}", line);
        Ok(line)
    }

    /// Show `prompt` and read the answer
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        self.say(prompt)?;
        self.read()
    }

    /// Show `prompt`, then keep reading until `parse` accepts an answer
    ///
    /// Every rejected answer is followed by `retry_prompt`. Stream failures end
    /// the loop immediately, as does reaching the configured attempt limit.
    pub fn ask_until<T, F>(
        &mut self,
        prompt: &str,
        retry_prompt: &str,
        mut parse: F,
    ) -> Result<T, InputError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.say(prompt)?;
        let mut attempts = 0u32;
        loop {
            let line = self.read()?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            attempts += 1;
            debug!("Rejected answer {:?} (attempt {})", line, attempts);
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    return Err(InputError::AttemptsExhausted { attempts });
                }
            }
            self.say(retry_prompt)?;
        }
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Prompter;
    use std::io::Cursor;

    pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    /// Prompter fed from a fixed script of input lines
    pub fn scripted(lines: &[&str]) -> ScriptedPrompter {
        let mut input = lines.join("\n");
        if !lines.is_empty() {
            input.push('\n');
        }
        Prompter::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    /// Prompter fed from raw bytes, for input that is not valid UTF-8
    pub fn scripted_bytes(input: &[u8]) -> ScriptedPrompter {
        Prompter::new(Cursor::new(input.to_vec()), Vec::new())
    }

    /// Everything written so far
    pub fn output(prompter: ScriptedPrompter) -> String {
        let (_, out) = prompter.into_parts();
        String::from_utf8(out).unwrap()
    }
}
