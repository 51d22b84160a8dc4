use std::fmt;

pub mod executor;

pub use executor::{CapturedOutput, ProcessExecutor};

#[derive(Debug)]
pub enum ProcessError {
    /// The OS could not give us the pipe or the child (descriptor or process table exhausted).
    ResourceExhausted(std::io::Error),
    /// Reading the child's output or waiting on it failed.
    Io(std::io::Error),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::ResourceExhausted(e) => {
                write!(f, "Unable to create pipe or child process: {}", e)
            }
            ProcessError::Io(e) => write!(f, "Child process I/O failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::ResourceExhausted(e) | ProcessError::Io(e) => Some(e),
        }
    }
}
