//! Lexeme tags produced by the raw scanner.

use std::ops::Range;

/// Classification of a raw lexeme.
///
/// Error conditions are tags, not `Err` values: the scanner always makes
/// progress and the cooking layer decides how to report them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexemeTag {
    /// A single space, tab or carriage return.
    Whitespace,
    /// A single `\n`.
    Newline,
    /// `##` through end of line (newline excluded).
    LineComment,
    /// `#* ... *#`.
    BlockComment,
    /// `#*` with no closing `*#`; runs to end of input.
    UnterminatedBlockComment,
    /// `"..."`, quotes included.
    String,
    /// `"` with no closing quote; runs to end of input.
    UnterminatedString,
    /// `'...'`, quotes included. Interior length is not checked here.
    Char,
    /// `'` with no closing quote; runs to end of input.
    UnterminatedChar,
    /// Digits with at most one `.` between digits.
    Number,
    /// Digits running straight into letters or `_`, e.g. `9lives`.
    MalformedNumber,
    /// Letter or `_` followed by letters, digits or `_`.
    Ident,
    /// A lone `_`.
    Underscore,
    /// One- or two-character operator, longest match first.
    Operator,
    /// Single-character delimiter: `( ) [ ] { } ; : , .`
    Punct,
    /// Any character outside the language alphabet.
    InvalidChar,
    /// End of input (zero length).
    Eof,
}

impl LexemeTag {
    /// Human-readable name for debugging.
    pub const fn name(self) -> &'static str {
        match self {
            LexemeTag::Whitespace => "whitespace",
            LexemeTag::Newline => "newline",
            LexemeTag::LineComment => "line comment",
            LexemeTag::BlockComment => "block comment",
            LexemeTag::UnterminatedBlockComment => "unterminated block comment",
            LexemeTag::String => "string",
            LexemeTag::UnterminatedString => "unterminated string",
            LexemeTag::Char => "char",
            LexemeTag::UnterminatedChar => "unterminated char",
            LexemeTag::Number => "number",
            LexemeTag::MalformedNumber => "malformed number",
            LexemeTag::Ident => "identifier",
            LexemeTag::Underscore => "underscore",
            LexemeTag::Operator => "operator",
            LexemeTag::Punct => "punctuation",
            LexemeTag::InvalidChar => "invalid character",
            LexemeTag::Eof => "end of file",
        }
    }

    /// Whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            LexemeTag::Whitespace
                | LexemeTag::Newline
                | LexemeTag::LineComment
                | LexemeTag::BlockComment
        )
    }

    /// Tags that always cook to an invalid token.
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            LexemeTag::UnterminatedBlockComment
                | LexemeTag::UnterminatedString
                | LexemeTag::UnterminatedChar
                | LexemeTag::MalformedNumber
                | LexemeTag::Underscore
                | LexemeTag::InvalidChar
        )
    }
}

/// A raw lexeme: tag, byte range and start position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub tag: LexemeTag,
    /// Byte offset of the first byte.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl Lexeme {
    /// Byte offset one past the last byte.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Byte range for slicing the source text.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}
