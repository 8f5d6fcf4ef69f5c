//! LXC front end.
//!
//! Runs the whole pipeline over one source text: scan, classify and cook
//! tokens, then parse with recovery. The result keeps every stage's
//! output so callers can inspect tokens, the parse trace, or just the
//! merged diagnostics.
//!
//! ```text
//! source ──lex──▶ TokenList + LexErrors ──parse──▶ ParseTrace + Diagnostics
//! ```

mod config;

use std::sync::Once;

use lxc_diagnostic::Diagnostic;
use lxc_ir::TokenList;
use lxc_lexer::LexError;
use lxc_parse::ParseOutput;
use tracing::debug;

pub use config::{ConfigError, FrontendConfig, MAX_TAB_WIDTH};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=lxc_parse=debug` or `RUST_LOG=lxc_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Everything one front-end run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendResult {
    pub tokens: TokenList,
    pub lex_errors: Vec<LexError>,
    pub parse: ParseOutput,
}

impl FrontendResult {
    /// No lexical anomalies and no syntax errors.
    pub fn is_ok(&self) -> bool {
        self.lex_errors.is_empty() && self.parse.is_ok()
    }

    /// Lexical and syntax diagnostics merged in source order.
    ///
    /// At equal positions the lexical diagnostic comes first.
    pub fn all_diagnostics(&self) -> Vec<Diagnostic> {
        let mut all: Vec<Diagnostic> = self
            .lex_errors
            .iter()
            .map(LexError::to_diagnostic)
            .chain(self.parse.diagnostics.iter().cloned())
            .collect();
        all.sort_by_key(Diagnostic::position);
        all
    }
}

/// Lex and parse `source`.
pub fn check_source(source: &str, config: &FrontendConfig) -> Result<FrontendResult, ConfigError> {
    config.validate()?;

    let lexed = lxc_lexer::lex(source, &config.scan_options());
    let parse = lxc_parse::parse(&lexed.tokens, &config.parse_config());
    debug!(
        tokens = lexed.tokens.len(),
        lex_errors = lexed.errors.len(),
        diagnostics = parse.diagnostics.len(),
        suppressed = parse.suppressed,
        "checked source"
    );

    Ok(FrontendResult {
        tokens: lexed.tokens,
        lex_errors: lexed.errors,
        parse,
    })
}
