use crate::validation::ValidationError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    time::Duration,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunError {
    AllocationFailure,
    IncompleteRule(ValidationError),
    KilledBySignal(i32),
    NonZeroExit(i32),
    SpawnFailed { program: String, message: String },
    TimedOut(Duration),
    WaitFailed { program: String, message: String },
}

impl RunError {
    /// Returns `true` if a child process was attempted.
    pub fn is_execution_error(&self) -> bool {
        !matches!(self, Self::AllocationFailure | Self::IncompleteRule(_))
    }
}

impl Error for RunError {}

impl Display for RunError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::AllocationFailure => write!(formatter, "failed to allocate argument vector"),
            Self::IncompleteRule(error) => write!(formatter, "{}", error),
            Self::KilledBySignal(signal) => {
                write!(formatter, "child process killed by signal {}", signal)
            }
            Self::NonZeroExit(code) => {
                write!(formatter, "child process exited with status code {}", code)
            }
            Self::SpawnFailed { program, message } => {
                write!(formatter, "failed to spawn \"{}\": {}", program, message)
            }
            Self::TimedOut(duration) => {
                write!(formatter, "child process timed out after {:?}", duration)
            }
            Self::WaitFailed { program, message } => {
                write!(formatter, "failed to wait for \"{}\": {}", program, message)
            }
        }
    }
}

impl From<ValidationError> for RunError {
    fn from(error: ValidationError) -> Self {
        Self::IncompleteRule(error)
    }
}
