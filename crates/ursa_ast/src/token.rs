//! The token pair produced by the scanner.

use crate::token_kind::TokenKind;
use std::fmt;

/// A lexical token: a kind plus the literal text it was scanned from.
/// Tokens are produced once by the scanner and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The literal source text of the token. Empty for end of file.
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input sentinel, carrying an empty literal.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::EndOfFileToken,
            literal: String::new(),
        }
    }

    /// Whether this token is the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFileToken
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::eof()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}
