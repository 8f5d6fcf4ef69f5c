//! A positioned front-end diagnostic and its rendering.

use std::fmt;

use lxc_ir::Token;

use crate::ErrorCode;

/// Lexeme text reported for problems found at end of input.
const END_OF_FILE: &str = "end of file";

/// A single front-end problem: what, where, and the text found there.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// The offending lexeme, or `end of file`.
    pub found: String,
}

impl Diagnostic {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        line: u32,
        column: u32,
        found: impl Into<String>,
    ) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line,
            column,
            found: found.into(),
        }
    }

    /// A diagnostic pointing at `token`.
    pub fn at_token(code: ErrorCode, message: impl Into<String>, token: &Token) -> Self {
        Diagnostic::new(code, message, token.line, token.column, token.text.clone())
    }

    /// A diagnostic pointing just past the last character of the input.
    pub fn at_end(code: ErrorCode, message: impl Into<String>, line: u32, column: u32) -> Self {
        Diagnostic::new(code, message, line, column, END_OF_FILE)
    }

    /// Whether this points at end of input rather than a token.
    pub fn is_at_end(&self) -> bool {
        self.found == END_OF_FILE
    }

    /// Sort key: source order.
    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

/// `line:column: error[CODE]: message (found 'text')`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: error[{}]: {}",
            self.line, self.column, self.code, self.message
        )?;
        if self.is_at_end() {
            write!(f, " (found {END_OF_FILE})")
        } else {
            write!(f, " (found '{}')", self.found.escape_debug())
        }
    }
}
