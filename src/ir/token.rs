use super::ConstructionError;
use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    sync::Arc,
};

pub const DEFAULT_CAPACITY: usize = 128 - 8;
pub const FLAG_CAPACITY: usize = DEFAULT_CAPACITY;
pub const OBJECT_CAPACITY: usize = DEFAULT_CAPACITY;
pub const COMPILER_CAPACITY: usize = DEFAULT_CAPACITY;
pub const OUTPUT_CAPACITY: usize = DEFAULT_CAPACITY;

/// An immutable string bounded by a capacity in bytes.
///
/// A token is either a flag or an object path. Its text always fits a
/// process argument: it is shorter than its capacity and has no NUL bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token(Arc<str>);

impl Token {
    pub fn new(text: &str, capacity: usize) -> Result<Self, ConstructionError> {
        if text.len() >= capacity {
            return Err(ConstructionError::TokenTooLong {
                length: text.len(),
                capacity,
            });
        } else if let Some(position) = text.find('\0') {
            return Err(ConstructionError::NulByte(position));
        }

        Ok(Self(text.into()))
    }

    pub fn flag(text: &str) -> Result<Self, ConstructionError> {
        Self::new(text, FLAG_CAPACITY)
    }

    pub fn object(text: &str) -> Result<Self, ConstructionError> {
        Self::new(text, OBJECT_CAPACITY)
    }

    /// Checks that the token also fits a smaller capacity.
    pub(crate) fn fit(&self, capacity: usize) -> Result<(), ConstructionError> {
        if self.0.len() >= capacity {
            Err(ConstructionError::TokenTooLong {
                length: self.0.len(),
                capacity,
            })
        } else {
            Ok(())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn downgrade(&self) -> std::sync::Weak<str> {
        Arc::downgrade(&self.0)
    }
}

impl Default for Token {
    fn default() -> Self {
        Self("".into())
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Token {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", &self.0)
    }
}
