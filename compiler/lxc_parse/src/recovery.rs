//! Panic-mode error recovery.
//!
//! After a syntax error the parser discards tokens until it reaches a
//! synchronization point: a `;` (consumed), a `}` or a statement-start
//! keyword (left for the caller). A `{ ... }` group met while skipping is
//! skipped as a whole so its statements are not mistaken for the resume
//! point of the broken outer statement.
//!
//! Keyword sets use a `u64` bitset over [`Keyword::index`] for O(1)
//! membership testing.

use lxc_ir::{Delimiter, Keyword, TokenKind};
use tracing::debug;

use crate::cursor::Cursor;

/// A set of keywords as a bitset.
///
/// # Example
/// ```ignore
/// const LOOP_START: KeywordSet = KeywordSet::new()
///     .with(Keyword::Continue)
///     .with(Keyword::Stop);
///
/// assert!(LOOP_START.contains(Keyword::Stop));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordSet(u64);

// Every keyword must fit in the bitset.
const _: () = assert!(Keyword::ALL.len() <= 64);

impl KeywordSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a keyword (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kw: Keyword) -> Self {
        Self(self.0 | (1u64 << kw.index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kw: Keyword) -> bool {
        (self.0 & (1u64 << kw.index())) != 0
    }

    /// Whether `kind` is a keyword in this set.
    #[inline]
    pub const fn contains_kind(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Keyword(kw) => self.contains(kw),
            _ => false,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Data types; each starts a declaration.
pub const DATA_TYPES: KeywordSet = KeywordSet::new()
    .with(Keyword::Int)
    .with(Keyword::Float)
    .with(Keyword::Char)
    .with(Keyword::Text)
    .with(Keyword::Bool)
    .with(Keyword::Time)
    .with(Keyword::Date)
    .with(Keyword::Timestamp);

/// Scope modifiers; each starts a declaration.
pub const SCOPE_MODIFIERS: KeywordSet = KeywordSet::new()
    .with(Keyword::Let)
    .with(Keyword::Var)
    .with(Keyword::Out)
    .with(Keyword::In)
    .with(Keyword::Only);

/// Keywords that begin a statement.
pub const STMT_START: KeywordSet = DATA_TYPES
    .union(SCOPE_MODIFIERS)
    .with(Keyword::Cons)
    .with(Keyword::Do) // do if
    .with(Keyword::Compare)
    .with(Keyword::Continue) // continue until
    .with(Keyword::Stop) // stop when
    .with(Keyword::Display)
    .with(Keyword::Put)
    .with(Keyword::Break)
    .with(Keyword::Back);

/// Keywords that continue an enclosing conditional (`what if`, `then do`).
pub const CLAUSE_START: KeywordSet = KeywordSet::new()
    .with(Keyword::What)
    .with(Keyword::Then);

/// Where recovery may stop without consuming.
pub const RESUME: KeywordSet = STMT_START.union(CLAUSE_START);

/// Discard tokens until a synchronization point, then leave panic mode.
///
/// Always discards at least one token unless already at end of stream.
/// Stops after a `;` or before a `}` / keyword in `stops`, counting only
/// tokens outside any `{ ... }` group skipped along the way.
///
/// Returns the number of tokens discarded.
pub fn synchronize(cursor: &mut Cursor<'_>, stops: KeywordSet) -> usize {
    let mut skipped = 0;
    let mut depth = 0usize;

    while let Some(token) = cursor.current() {
        if skipped > 0 && depth == 0 {
            let at_stop = token.kind == TokenKind::Delimiter(Delimiter::RBrace)
                || stops.contains_kind(token.kind);
            if at_stop {
                break;
            }
        }
        match token.kind {
            TokenKind::Delimiter(Delimiter::LBrace) => depth += 1,
            TokenKind::Delimiter(Delimiter::RBrace) => depth = depth.saturating_sub(1),
            TokenKind::Delimiter(Delimiter::Semicolon) if depth == 0 => {
                cursor.advance();
                skipped += 1;
                break;
            }
            _ => {}
        }
        cursor.advance();
        skipped += 1;
    }

    cursor.clear_panic();
    debug!(skipped, at_end = cursor.is_at_end(), "synchronized");
    skipped
}

/// Skip to the next arm of a `compare`: a `what` or `then` keyword, or the
/// `}` closing the compare, outside any nested `{ ... }` group.
///
/// Nothing is skipped if the cursor is already there. Panic mode ends only
/// if something was skipped. Returns the number of tokens discarded.
pub fn skip_to_compare_arm(cursor: &mut Cursor<'_>) -> usize {
    let mut skipped = 0;
    let mut depth = 0usize;

    while let Some(token) = cursor.current() {
        match token.kind {
            TokenKind::Delimiter(Delimiter::RBrace) if depth == 0 => break,
            TokenKind::Keyword(kw) if depth == 0 && CLAUSE_START.contains(kw) => break,
            TokenKind::Delimiter(Delimiter::LBrace) => depth += 1,
            TokenKind::Delimiter(Delimiter::RBrace) => depth -= 1,
            _ => {}
        }
        cursor.advance();
        skipped += 1;
    }

    if skipped > 0 {
        cursor.clear_panic();
    }
    debug!(skipped, "skipped to compare arm");
    skipped
}
