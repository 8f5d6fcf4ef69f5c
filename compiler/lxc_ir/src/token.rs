//! Token types for the LXC lexer.
//!
//! A token is immutable once created: kind, source text, and the 1-based
//! line and column where it starts. Whitespace and comments are kept as
//! tokens so positions stay exact; the parser skips them.

mod operator;
mod word;

pub use operator::{Delimiter, Operator};
pub use word::{Keyword, ReservedWord};

use std::fmt;

/// A token with its source text and position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Whitespace or comment.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Column one past the last character, when the token sits on one line.
    pub fn end_column(&self) -> u32 {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        self.column.saturating_add(chars)
    }
}

/// Renders as `Kind(text)`, e.g. `Keyword(main)` or `Delimiter(:)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.text)
    }
}

/// The eleven token kinds.
///
/// Operators, keywords, reserved words and delimiters carry a sub-kind so
/// the parser can match them structurally instead of comparing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Identifier,
    Operator(Operator),
    Keyword(Keyword),
    ReservedWord(ReservedWord),
    /// `"..."`, quotes included in the text.
    StringLiteral,
    /// `'x'`, quotes included in the text.
    CharLiteral,
    NumericConstant,
    Comment,
    Whitespace,
    Delimiter(Delimiter),
    /// Anything the lexer could not make sense of.
    Invalid,
}

impl TokenKind {
    /// Name of the kind without its sub-kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Operator(_) => "Operator",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::ReservedWord(_) => "ReservedWord",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::NumericConstant => "NumericConstant",
            TokenKind::Comment => "Comment",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Delimiter(_) => "Delimiter",
            TokenKind::Invalid => "Invalid",
        }
    }

    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, append-only token sequence.
///
/// Also records the position just past the last character so errors at
/// end of input can still point somewhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenList {
    tokens: Vec<Token>,
    end_line: u32,
    end_column: u32,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            end_line: 1,
            end_column: 1,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            end_line: 1,
            end_column: 1,
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Record where the input ends.
    pub fn set_end(&mut self, line: u32, column: u32) {
        self.end_line = line;
        self.end_column = column;
    }

    /// `(line, column)` just past the last character.
    #[inline]
    pub fn end_position(&self) -> (u32, u32) {
        (self.end_line, self.end_column)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Tokens other than whitespace and comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_trivia())
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Concatenated text of every token; equals the scanned source.
    pub fn source_text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Significant tokens separated by single spaces.
impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.significant().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
