//! Lexical anomaly records.
//!
//! Anomalies never stop lexing: the offending lexeme becomes an
//! `Invalid` token and a [`LexError`] records what was wrong and where.

use lxc_diagnostic::{Diagnostic, ErrorCode};

/// A lexical anomaly at a source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line of the lexeme.
    pub line: u32,
    /// 1-based column of the lexeme.
    pub column: u32,
    /// The lexeme text.
    pub text: String,
}

/// What kind of anomaly was found.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `#*` with no closing `*#`.
    UnterminatedBlockComment,
    /// `"` with no closing `"`.
    UnterminatedString,
    /// `'` with no closing `'`.
    UnterminatedChar,
    /// `''` or `'ab'`.
    InvalidCharLiteral,
    /// Digits running into letters, e.g. `2nd`.
    MalformedNumber,
    /// `_` on its own.
    LoneUnderscore,
    /// A character outside the language alphabet.
    InvalidCharacter,
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter => ErrorCode::E0002,
            LexErrorKind::MalformedNumber => ErrorCode::E0003,
            LexErrorKind::UnterminatedChar => ErrorCode::E0004,
            LexErrorKind::InvalidCharLiteral => ErrorCode::E0005,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0006,
            LexErrorKind::LoneUnderscore => ErrorCode::E0007,
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, column: u32, text: impl Into<String>) -> Self {
        LexError {
            kind,
            line,
            column,
            text: text.into(),
        }
    }

    /// Primary message for this error.
    pub fn message(&self) -> String {
        match self.kind {
            LexErrorKind::UnterminatedBlockComment => {
                "Block comment is never closed; add '*#'".to_string()
            }
            LexErrorKind::UnterminatedString => "String literal is missing its closing '\"'".to_string(),
            LexErrorKind::UnterminatedChar => {
                "Character literal is missing its closing '''".to_string()
            }
            LexErrorKind::InvalidCharLiteral => {
                "A character literal must hold exactly one character".to_string()
            }
            LexErrorKind::MalformedNumber => format!(
                "'{}' is not a valid number or identifier; identifiers cannot start with a digit",
                self.text
            ),
            LexErrorKind::LoneUnderscore => "'_' on its own is not a valid identifier".to_string(),
            LexErrorKind::InvalidCharacter => {
                format!("Invalid character '{}'", self.text.escape_debug())
            }
        }
    }

    /// Convert to a diagnostic.
    ///
    /// Long lexemes (an unterminated comment swallows the rest of the
    /// file) are cut to their first line in the `found` field.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let found = self.text.lines().next().unwrap_or_default();
        Diagnostic::new(self.kind.code(), self.message(), self.line, self.column, found)
    }
}

#[cfg(test)]
mod tests;
