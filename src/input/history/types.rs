use chrono::{DateTime, Local};
use std::fmt;

/// Outcome recorded for a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Valid,
    Invalid,
}

impl CommandStatus {
    /// Code shown by `log`: `0` for success, `-1` for anything that failed.
    pub fn code(self) -> i32 {
        match self {
            CommandStatus::Valid => 0,
            CommandStatus::Invalid => -1,
        }
    }

    pub fn from_success(success: bool) -> Self {
        if success {
            CommandStatus::Valid
        } else {
            CommandStatus::Invalid
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub command: String,
    pub timestamp: DateTime<Local>,
    pub status: CommandStatus,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>, status: CommandStatus) -> Self {
        Self {
            command: command.into(),
            timestamp: Local::now(),
            status,
        }
    }

    /// First `log` line: the local time the command ran.
    pub fn timestamp_line(&self) -> String {
        self.timestamp.format("%c").to_string()
    }

    /// Second `log` line: ` <name> <status>`.
    pub fn summary_line(&self) -> String {
        format!(" {} {}", self.command, self.status)
    }
}
