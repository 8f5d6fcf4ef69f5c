//! Low-level scanner for LXC source text.
//!
//! Segments a character stream into [`Lexeme`]s, each carrying a
//! [`LexemeTag`], its byte range and the 1-based line/column where it
//! starts. No keyword resolution and no literal validation happens here;
//! the `lxc_lexer` crate cooks lexemes into tokens.
//!
//! The scanner never fails. Malformed input is encoded in the tag
//! (`UnterminatedString`, `MalformedNumber`, `InvalidChar`, ...).

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{scan, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{Lexeme, LexemeTag};

/// Column width of a tab character when none is configured.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// Options controlling position bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Columns a tab advances by.
    pub tab_width: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}
