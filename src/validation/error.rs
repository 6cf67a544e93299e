use crate::ir::RuleComponent;
use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    IncompleteRule(Vec<RuleComponent>),
}

impl Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::IncompleteRule(components) => {
                write!(
                    formatter,
                    "incomplete build rule: missing {}",
                    components.iter().join(", ")
                )
            }
        }
    }
}
