use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text that names none of the menu commands
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command '{0}'")]
pub struct UnknownCommand(pub String);

/// Menu commands of the visit log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Save,
    GetHistory,
    GetLastVisit,
    Exit,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Save,
        Command::GetHistory,
        Command::GetLastVisit,
        Command::Exit,
    ];

    /// Name as shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            Command::Save => "Save",
            Command::GetHistory => "GetHistory",
            Command::GetLastVisit => "GetLastVisit",
            Command::Exit => "Exit",
        }
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Case-insensitive match on the trimmed keyword
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        Command::ALL
            .into_iter()
            .find(|command| command.label().to_lowercase() == keyword)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
