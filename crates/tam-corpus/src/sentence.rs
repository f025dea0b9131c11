//! Parsed sentences.

use std::{collections::HashMap, fmt};

use crate::Token;

/// One parsed sentence: tokens in linear order plus an index lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Canonical name of the corpus dialect the sentence came from.
    source: String,
    /// Tokens in text order.
    tokens: Vec<Token>,
    /// Token index -> position in `tokens`.
    by_index: HashMap<u32, usize>,
}

impl Sentence {
    /// Creates an empty sentence tagged with `source`.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            tokens: Vec::new(),
            by_index: HashMap::new(),
        }
    }

    /// Builds a sentence from tokens in order.
    pub fn from_tokens(source: &str, tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut sentence = Self::new(source);
        for token in tokens {
            sentence.push(token);
        }
        sentence
    }

    /// Appends a token. A repeated index shadows the earlier token in lookups.
    pub fn push(&mut self, token: Token) {
        self.by_index.insert(token.index, self.tokens.len());
        self.tokens.push(token);
    }

    /// Returns the source tag.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the tokens in text order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Looks a token up by its source-defined index.
    pub fn token_by_index(&self, index: u32) -> Option<&Token> {
        self.by_index.get(&index).map(|&pos| &self.tokens[pos])
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.form)?;
        }
        Ok(())
    }
}
