use super::{COMPILER_CAPACITY, ConstructionError, FLAG_CAPACITY, Token, TokenList};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiler {
    command: Token,
    flags: TokenList,
}

impl Compiler {
    pub fn new(command: &str) -> Result<Self, ConstructionError> {
        Ok(Self {
            command: Token::new(command, COMPILER_CAPACITY)?,
            flags: TokenList::with_token_capacity(FLAG_CAPACITY),
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn flags(&self) -> &TokenList {
        &self.flags
    }

    pub fn add_flag(&mut self, flag: &str) -> Result<(), ConstructionError> {
        self.flags.append(flag)
    }

    pub(crate) fn add_flags(&mut self, flags: TokenList) -> Result<(), ConstructionError> {
        self.flags.extend(flags)
    }
}
