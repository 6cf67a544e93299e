use crate::{
    ir::{ConstructionError, RuleError},
    run::RunError,
};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Construction(ConstructionError),
    Other(String),
    Rule(RuleError),
    Run(RunError),
}

impl ApplicationError {
    /// Returns `true` if a child process ran or failed to start.
    pub fn is_execution_error(&self) -> bool {
        matches!(self, Self::Run(error) if error.is_execution_error())
    }
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Construction(error) => write!(formatter, "{}", error),
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Rule(error) => write!(formatter, "{}", error),
            Self::Run(error) => write!(formatter, "{}", error),
        }
    }
}

impl From<ConstructionError> for ApplicationError {
    fn from(error: ConstructionError) -> Self {
        Self::Construction(error)
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<RuleError> for ApplicationError {
    fn from(error: RuleError) -> Self {
        Self::Rule(error)
    }
}

impl From<RunError> for ApplicationError {
    fn from(error: RunError) -> Self {
        Self::Run(error)
    }
}
