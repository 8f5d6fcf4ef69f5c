//! Stable error codes for lexical (E0xxx) and syntax (E1xxx) problems.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer anomalies
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer anomalies (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Digits run straight into letters
    E0003,
    /// Unterminated character literal
    E0004,
    /// Character literal without exactly one character
    E0005,
    /// Unterminated block comment
    E0006,
    /// Lone underscore
    E0007,

    // Parser errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected data type
    E1005,
    /// Missing semicolon
    E1006,
    /// Not a statement
    E1007,
    /// Missing or malformed program header
    E1008,
    /// Tokens after the end of the program
    E1009,
    /// Expected keyword
    E1010,
    /// Expected assignment operator
    E1011,
}

impl ErrorCode {
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
        }
    }

    /// One-line summary of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E0003 => "malformed number",
            ErrorCode::E0004 => "unterminated character literal",
            ErrorCode::E0005 => "invalid character literal",
            ErrorCode::E0006 => "unterminated block comment",
            ErrorCode::E0007 => "lone underscore",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected data type",
            ErrorCode::E1006 => "missing semicolon",
            ErrorCode::E1007 => "not a statement",
            ErrorCode::E1008 => "malformed program header",
            ErrorCode::E1009 => "tokens after end of program",
            ErrorCode::E1010 => "expected keyword",
            ErrorCode::E1011 => "expected assignment operator",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
