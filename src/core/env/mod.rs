mod vars;

pub use vars::VariableStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    MalformedAssignment(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::MalformedAssignment(raw) => write!(f, "Variable value expected: {}", raw),
        }
    }
}

impl std::error::Error for EnvError {}
