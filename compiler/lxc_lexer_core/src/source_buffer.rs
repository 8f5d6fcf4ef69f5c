//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees `0x00` bytes after the source content so the
//! scanner can detect end of input by looking at the current byte. The
//! allocation is rounded up to a 64-byte boundary and always leaves room
//! for `peek()` and `peek2()` from the sentinel itself.

use crate::{Cursor, ScanOptions};

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the source: the sentinel plus two lookahead slots.
const SENTINEL_PAD: usize = 3;

/// Sentinel-terminated copy of the source text.
///
/// ```text
/// [source_bytes..., 0x00, 0x00, 0x00, padding_zeros...]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to that length.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let kept = source_len as usize;

        let padded_len = (kept + SENTINEL_PAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..kept].copy_from_slice(&bytes[..kept]);

        SourceBuffer { buf, source_len }
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// A cursor at line 1, column 1 using the default options.
    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_with(ScanOptions::default())
    }

    /// A cursor at line 1, column 1.
    pub fn cursor_with(&self, options: ScanOptions) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, options.tab_width)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
