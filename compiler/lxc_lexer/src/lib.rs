//! Lexer for LXC.
//!
//! Drives the raw scanner from `lxc_lexer_core`, classifies words with
//! the keyword automaton and cooks every lexeme into a [`Token`](lxc_ir::Token). Lexing
//! is lossless: concatenating the text of every token reproduces the
//! source exactly. Anomalies become `Invalid` tokens plus [`LexError`]
//! records; lexing itself never fails.

mod cooker;
pub mod keywords;
mod lex_error;

use lxc_diagnostic::Diagnostic;
use lxc_ir::TokenList;
use tracing::debug;

pub use keywords::{classify, Classifier, WordClass};
pub use lex_error::{LexError, LexErrorKind};
pub use lxc_lexer_core::ScanOptions;

use crate::cooker::TokenCooker;

/// Tokens plus the anomalies found while producing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Anomalies as diagnostics, in source order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(LexError::to_diagnostic).collect()
    }
}

/// Lex `source` into tokens.
pub fn lex(source: &str, options: &ScanOptions) -> LexOutput {
    let (lexemes, (end_line, end_column)) = lxc_lexer_core::scan(source, *options);
    let mut cooker = TokenCooker::new(source);
    let mut tokens = TokenList::with_capacity(lexemes.len());

    for lexeme in &lexemes {
        tokens.push(cooker.cook(lexeme));
    }
    tokens.set_end(end_line, end_column);
    debug_assert_eq!(tokens.source_text(), source, "lexing must be lossless");

    let errors = cooker.into_errors();
    debug!(
        tokens = tokens.len(),
        significant = tokens.significant().count(),
        errors = errors.len(),
        "lexed source"
    );
    LexOutput { tokens, errors }
}

/// Lex with default options, keeping only the tokens.
pub fn tokenize(source: &str) -> TokenList {
    lex(source, &ScanOptions::default()).tokens
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
