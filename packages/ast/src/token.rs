use serde::{Deserialize, Serialize};

/// Lexical category of a value token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Ident,
    /// `#` followed by name characters. The text keeps the leading `#`.
    Hash,
    Number,
    Dimension,
    Percentage,
    String,
    Function,
    Delim,
    Whitespace,
}

/// A single value token as produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn ident(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Ident, text)
    }

    pub fn hash(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Hash, text)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
