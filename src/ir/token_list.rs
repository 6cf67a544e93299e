use super::{ConstructionError, DEFAULT_CAPACITY, Token};

/// An append-only list of tokens in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    token_capacity: usize,
}

impl TokenList {
    pub fn new() -> Self {
        Self::with_token_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_token_capacity(token_capacity: usize) -> Self {
        Self {
            tokens: vec![],
            token_capacity,
        }
    }

    pub fn try_from_iter<T: AsRef<str>>(
        texts: impl IntoIterator<Item = T>,
    ) -> Result<Self, ConstructionError> {
        let mut list = Self::new();

        for text in texts {
            list.append(text.as_ref())?;
        }

        Ok(list)
    }

    /// Copies a text into a new token at the tail of the list.
    ///
    /// The list is left untouched on failure.
    pub fn append(&mut self, text: &str) -> Result<(), ConstructionError> {
        let token = Token::new(text, self.token_capacity)?;

        self.push(token)
    }

    /// Moves tokens of another list to the tail of this list.
    ///
    /// Every token must fit this list's capacity. The list is left untouched
    /// on failure.
    pub(crate) fn extend(&mut self, other: TokenList) -> Result<(), ConstructionError> {
        for token in &other.tokens {
            token.fit(self.token_capacity)?;
        }

        self.tokens
            .try_reserve(other.tokens.len())
            .map_err(|_| ConstructionError::AllocationFailure)?;
        self.tokens.extend(other.tokens);

        Ok(())
    }

    fn push(&mut self, token: Token) -> Result<(), ConstructionError> {
        self.tokens
            .try_reserve(1)
            .map_err(|_| ConstructionError::AllocationFailure)?;
        self.tokens.push(token);

        Ok(())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + Clone {
        self.tokens.iter().map(Token::as_str)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token_capacity(&self) -> usize {
        self.token_capacity
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
