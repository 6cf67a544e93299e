use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConstructionError {
    AllocationFailure,
    NulByte(usize),
    TokenTooLong { length: usize, capacity: usize },
}

impl Error for ConstructionError {}

impl Display for ConstructionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::AllocationFailure => write!(formatter, "failed to allocate token"),
            Self::NulByte(position) => {
                write!(formatter, "token contains NUL byte at position {position}")
            }
            Self::TokenTooLong { length, capacity } => write!(
                formatter,
                "token of {length} bytes exceeds capacity of {capacity} bytes"
            ),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RuleError {
    Construction(ConstructionError),
    MissingCompiler,
    MissingDependencies,
    MissingTarget,
}

impl Error for RuleError {}

impl Display for RuleError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Construction(error) => write!(formatter, "{}", error),
            Self::MissingCompiler => write!(formatter, "build rule has no compiler"),
            Self::MissingDependencies => write!(formatter, "build rule has no dependencies"),
            Self::MissingTarget => write!(formatter, "build rule has no target"),
        }
    }
}

impl From<ConstructionError> for RuleError {
    fn from(error: ConstructionError) -> Self {
        Self::Construction(error)
    }
}
