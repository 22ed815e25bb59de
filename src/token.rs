//! Lexical tokens of the HCL surface syntax.
//!
//! A [`Token`] is a kind plus the raw bytes that render it. [`Tokens`] is the
//! ordered stream produced by the serializer and consumed by the formatter.
//! Tokens carry no spacing information; deciding whitespace is the job of
//! [`crate::format`].

use std::fmt;
use std::ops::Deref;

/// The complete set of token kinds the serializer can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    QuoteOpen,
    QuoteClose,
    QuotedLiteral,
    NumberLiteral,
    Comma,
    Newline,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Equal,
}

impl TokenKind {
    /// Returns `true` for `{` and `[`.
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, TokenKind::BraceOpen | TokenKind::BracketOpen)
    }

    /// Returns `true` for `}` and `]`.
    #[inline]
    #[must_use]
    pub const fn is_close(self) -> bool {
        matches!(self, TokenKind::BraceClose | TokenKind::BracketClose)
    }
}

/// A single token: its kind and the exact bytes it renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub bytes: Vec<u8>,
}

impl Token {
    pub fn new(kind: TokenKind, bytes: impl Into<Vec<u8>>) -> Self {
        Token {
            kind,
            bytes: bytes.into(),
        }
    }

    pub(crate) fn punct(kind: TokenKind) -> Self {
        let bytes: &[u8] = match kind {
            TokenKind::QuoteOpen | TokenKind::QuoteClose => b"\"",
            TokenKind::Comma => b",",
            TokenKind::Newline => b"\n",
            TokenKind::BraceOpen => b"{",
            TokenKind::BraceClose => b"}",
            TokenKind::BracketOpen => b"[",
            TokenKind::BracketClose => b"]",
            TokenKind::Equal => b"=",
            TokenKind::Identifier | TokenKind::QuotedLiteral | TokenKind::NumberLiteral => b"",
        };
        Token::new(kind, bytes)
    }

    pub(crate) fn ident(name: &str) -> Self {
        Token::new(TokenKind::Identifier, name.as_bytes())
    }

    /// The token's bytes as text. Every token the serializer emits is valid UTF-8.
    #[must_use]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// An ordered, immutable token stream.
///
/// # Examples
///
/// ```rust
/// use hcl_tokens::{to_tokens, TokenKind, Value};
///
/// let tokens = to_tokens(&Value::List(vec![])).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::BracketOpen, TokenKind::BracketClose]);
/// assert_eq!(tokens.bytes(), b"[]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    #[must_use]
    pub fn new() -> Self {
        Tokens(Vec::new())
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    pub(crate) fn push_kind(&mut self, kind: TokenKind) {
        self.0.push(Token::punct(kind));
    }

    pub(crate) fn extend(&mut self, other: Tokens) {
        self.0.extend(other.0);
    }

    /// Concatenates the raw bytes of every token, with no spacing added.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        let len = self.0.iter().map(|t| t.bytes.len()).sum();
        let mut out = Vec::with_capacity(len);
        for token in &self.0 {
            out.extend_from_slice(&token.bytes);
        }
        out
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Token> {
        self.0
    }
}

impl Deref for Tokens {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Tokens(tokens)
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punct_bytes() {
        assert_eq!(Token::punct(TokenKind::Equal).bytes, b"=");
        assert_eq!(Token::punct(TokenKind::QuoteOpen).bytes, b"\"");
        assert_eq!(Token::punct(TokenKind::Newline).bytes, b"\n");
    }

    #[test]
    fn test_bytes_concatenation() {
        let mut tokens = Tokens::new();
        tokens.push_kind(TokenKind::BracketOpen);
        tokens.push(Token::new(TokenKind::NumberLiteral, "1"));
        tokens.push_kind(TokenKind::BracketClose);
        assert_eq!(tokens.bytes(), b"[1]");
        assert_eq!(tokens.to_string(), "[1]");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::BraceOpen.is_open());
        assert!(TokenKind::BracketClose.is_close());
        assert!(!TokenKind::Equal.is_open());
    }
}
