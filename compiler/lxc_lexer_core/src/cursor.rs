//! Byte cursor over a sentinel-terminated buffer with position tracking.
//!
//! The cursor advances through the buffer byte by byte. End of input is
//! reached when the position reaches the source length; the byte there
//! is the `0x00` sentinel, so dispatch on `current()` needs no bounds check.
//!
//! Every advance updates the 1-based line and column of the next byte:
//! - `\n` moves to the next line and resets the column to 1
//! - `\t` advances the column by the configured tab width
//! - UTF-8 continuation bytes do not advance the column, so a column
//!   counts characters rather than bytes
//! - any other byte advances the column by 1

/// Cursor over a sentinel-terminated byte buffer.
///
/// `Copy` so the scanner can snapshot a position cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
    line: u32,
    column: u32,
    tab_width: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    ///
    /// `buf` must hold at least `source_len + 3` bytes, the tail being zero.
    /// [`SourceBuffer`](crate::SourceBuffer) guarantees that layout.
    pub fn new(buf: &'a [u8], source_len: u32, tab_width: u32) -> Self {
        debug_assert!(buf.len() >= source_len as usize + 3);
        Cursor {
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 1,
            tab_width,
        }
    }

    /// The byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte one past the current position.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// The byte two past the current position.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Line of the current byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current byte (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Consume one byte. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        match self.current() {
            b'\n' => {
                self.line += 1;
                self.column = 1;
            }
            b'\t' => self.column += self.tab_width,
            b if is_utf8_continuation(b) => {}
            _ => self.column += 1,
        }
        self.pos += 1;
    }

    /// Consume `n` bytes, stopping early at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Consume one whole UTF-8 character.
    pub fn advance_char(&mut self) {
        self.advance();
        while !self.is_eof() && is_utf8_continuation(self.current()) {
            self.advance();
        }
    }

    /// Consume bytes while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Consume up to, but not including, the next `\n`.
    ///
    /// Uses `memchr` to find the newline, then walks the skipped bytes once
    /// to keep the column in step (tabs inside comments still count).
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest();
        let end = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.advance_to(self.pos + offset(end));
    }

    /// Consume through the next occurrence of `delim`.
    ///
    /// Returns `false` (having consumed everything) if `delim` never occurs.
    pub fn skip_past(&mut self, delim: u8) -> bool {
        match memchr::memchr(delim, self.rest()) {
            Some(i) => {
                self.advance_to(self.pos + offset(i) + 1);
                true
            }
            None => {
                self.advance_to(self.source_len);
                false
            }
        }
    }

    /// Consume through the next occurrence of the byte sequence `needle`.
    ///
    /// Returns `false` (having consumed everything) if `needle` never occurs.
    pub fn skip_past_seq(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), needle) {
            Some(i) => {
                self.advance_to(self.pos + offset(i + needle.len()));
                true
            }
            None => {
                self.advance_to(self.source_len);
                false
            }
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    fn advance_to(&mut self, target: u32) {
        while self.pos < target && !self.is_eof() {
            self.advance();
        }
    }
}

#[inline]
fn is_utf8_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Offsets into the rest slice never exceed `source_len`, which is a `u32`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "slice offsets are bounded by source_len: u32"
)]
#[inline]
fn offset(n: usize) -> u32 {
    n as u32
}
