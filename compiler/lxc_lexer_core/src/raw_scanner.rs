//! Hand-written raw scanner producing [`Lexeme`] values.
//!
//! The scanner runs over a sentinel-terminated [`Cursor`] and allocates
//! nothing. It does not resolve keywords or validate literals; those are
//! deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused
//! method that advances the cursor; `next_token` stamps the resulting
//! lexeme with the start offset, line and column captured before the
//! dispatch. The sentinel byte (`0x00`) at end of input dispatches to
//! `Eof`. Two-character operators are matched by peeking one byte ahead
//! and preferring the longer match.

use crate::cursor::Cursor;
use crate::tag::{Lexeme, LexemeTag};
use crate::{ScanOptions, SourceBuffer};

/// Allocation-free scanner.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        RawScanner { cursor }
    }

    /// Line and column where the next lexeme starts.
    pub fn position(&self) -> (u32, u32) {
        (self.cursor.line(), self.cursor.column())
    }

    /// Produce the next lexeme.
    ///
    /// Returns a zero-length `Eof` lexeme when the source is exhausted, and
    /// keeps returning it on further calls.
    pub fn next_token(&mut self) -> Lexeme {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let column = self.cursor.column();
        let tag = self.dispatch();
        Lexeme {
            tag,
            start,
            len: self.cursor.pos() - start,
            line,
            column,
        }
    }

    fn dispatch(&mut self) -> LexemeTag {
        match self.cursor.current() {
            0 if self.cursor.is_eof() => LexemeTag::Eof,
            b' ' | b'\t' | b'\r' => self.single(LexemeTag::Whitespace),
            b'\n' => self.single(LexemeTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(),
            b'_' => self.underscore_or_ident(),
            b'0'..=b'9' => self.number(),
            b'"' => self.string(),
            b'\'' => self.char_literal(),
            b'#' => self.hash(),
            b'=' | b'!' | b'<' | b'>' | b'%' => self.op_then(b"="),
            b'+' => self.op_then(b"+="),
            b'-' => self.op_then(b"-=>"),
            b'*' => self.op_then(b"*="),
            b'/' => self.op_then(b"/="),
            b'&' => self.op_then(b"&"),
            b'|' => self.op_then(b"|"),
            b'?' | b'^' => self.single(LexemeTag::Operator),
            b'(' | b')' | b'[' | b']' | b'{' | b'}' | b';' | b':' | b',' | b'.' => {
                self.single(LexemeTag::Punct)
            }
            // Interior NUL, control characters, DEL, other ASCII symbols
            // and every non-ASCII character.
            _ => self.invalid_char(),
        }
    }

    // ─── Helpers ─────────────────────────────────────────────────────

    fn single(&mut self, tag: LexemeTag) -> LexemeTag {
        self.cursor.advance();
        tag
    }

    /// Operator whose second byte may be any of `seconds`.
    ///
    /// Covers the whole two-character table: `== != >= <= %=`, `++ +=`,
    /// `-- -= ->`, `** *=`, `// /=`, `&&` and `||`.
    fn op_then(&mut self, seconds: &[u8]) -> LexemeTag {
        let next = self.cursor.peek();
        self.cursor.advance();
        if seconds.contains(&next) {
            self.cursor.advance();
        }
        LexemeTag::Operator
    }

    // ─── Words and numbers ───────────────────────────────────────────

    fn identifier(&mut self) -> LexemeTag {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        LexemeTag::Ident
    }

    fn underscore_or_ident(&mut self) -> LexemeTag {
        if is_ident_continue(self.cursor.peek()) {
            self.identifier()
        } else {
            self.single(LexemeTag::Underscore)
        }
    }

    /// Digits, then a fraction only when a digit follows the `.`.
    ///
    /// A letter or `_` glued to the digits turns the whole alphanumeric
    /// run into one `MalformedNumber` lexeme.
    fn number(&mut self) -> LexemeTag {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        if is_ident_continue(self.cursor.current()) {
            self.cursor.eat_while(is_ident_continue);
            LexemeTag::MalformedNumber
        } else {
            LexemeTag::Number
        }
    }

    // ─── Literals ────────────────────────────────────────────────────

    fn string(&mut self) -> LexemeTag {
        self.cursor.advance();
        if self.cursor.skip_past(b'"') {
            LexemeTag::String
        } else {
            LexemeTag::UnterminatedString
        }
    }

    fn char_literal(&mut self) -> LexemeTag {
        self.cursor.advance();
        if self.cursor.skip_past(b'\'') {
            LexemeTag::Char
        } else {
            LexemeTag::UnterminatedChar
        }
    }

    // ─── Comments ────────────────────────────────────────────────────

    fn hash(&mut self) -> LexemeTag {
        match self.cursor.peek() {
            b'#' => {
                self.cursor.eat_until_newline_or_eof();
                LexemeTag::LineComment
            }
            b'*' => {
                self.cursor.advance_n(2);
                if self.cursor.skip_past_seq(b"*#") {
                    LexemeTag::BlockComment
                } else {
                    LexemeTag::UnterminatedBlockComment
                }
            }
            _ => self.single(LexemeTag::InvalidChar),
        }
    }

    // ─── Error lexemes ───────────────────────────────────────────────

    fn invalid_char(&mut self) -> LexemeTag {
        self.cursor.advance_char();
        LexemeTag::InvalidChar
    }
}

impl Iterator for RawScanner<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.next_token();
        if lexeme.tag == LexemeTag::Eof {
            None
        } else {
            Some(lexeme)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9 and underscore. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Scan `source` and collect every lexeme except the final `Eof`, together
/// with the line and column just past the last character.
pub fn scan(source: &str, options: ScanOptions) -> (Vec<Lexeme>, (u32, u32)) {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor_with(options));
    let lexemes: Vec<Lexeme> = scanner.by_ref().collect();
    (lexemes, scanner.position())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
