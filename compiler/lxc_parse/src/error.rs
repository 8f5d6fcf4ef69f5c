//! Parse error type.
//!
//! A [`ParseError`] is raised by a failed mandatory match and travels up
//! with `?` to the nearest statement boundary, where it is turned into a
//! [`Diagnostic`] and panic-mode recovery begins.

use std::fmt;

use lxc_diagnostic::{Diagnostic, ErrorCode};
use lxc_ir::Token;

/// Found-text used when the error is at end of input.
const END_OF_FILE: &str = "end of file";

/// A syntax error at a source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub line: u32,
    pub column: u32,
    /// The offending lexeme, or `end of file`.
    pub found: String,
}

impl ParseError {
    pub fn at_token(code: ErrorCode, message: impl Into<String>, token: &Token) -> Self {
        ParseError {
            code,
            message: message.into(),
            line: token.line,
            column: token.column,
            found: token.text.clone(),
        }
    }

    pub fn at_end(code: ErrorCode, message: impl Into<String>, line: u32, column: u32) -> Self {
        ParseError {
            code,
            message: message.into(),
            line,
            column,
            found: END_OF_FILE.to_string(),
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.found == END_OF_FILE
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        if self.is_at_end() {
            Diagnostic::at_end(self.code, self.message.clone(), self.line, self.column)
        } else {
            Diagnostic::new(
                self.code,
                self.message.clone(),
                self.line,
                self.column,
                self.found.clone(),
            )
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use lxc_ir::{Delimiter, TokenKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn to_diagnostic_keeps_fields() {
        let token = Token::new(TokenKind::Delimiter(Delimiter::Semicolon), ";", 1, 17);
        let err = ParseError::at_token(ErrorCode::E1002, "Expected an expression, found ';'", &token);
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E1002);
        assert_eq!(diag.position(), (1, 17));
        assert_eq!(diag.found, ";");
        assert_eq!(err.to_string(), "1:17: Expected an expression, found ';'");
    }

    #[test]
    fn end_of_file_errors() {
        let err = ParseError::at_end(ErrorCode::E1003, "Missing '}' to close a block", 3, 1);
        assert!(err.is_at_end());
        assert!(err.to_diagnostic().is_at_end());
    }
}
