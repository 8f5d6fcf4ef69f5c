//! Front-end configuration.

use lxc_lexer::ScanOptions;
use lxc_parse::ParseConfig;
use thiserror::Error;

/// Widest tab stop accepted.
pub const MAX_TAB_WIDTH: u32 = 16;

/// A configuration value out of range.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tab width must be between 1 and {MAX_TAB_WIDTH}, got {0}")]
    InvalidTabWidth(u32),

    #[error("diagnostic limit must be at least 1, got {0}")]
    InvalidDiagnosticLimit(usize),
}

/// Settings for one front-end run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Columns a tab advances by when computing positions.
    pub tab_width: u32,
    /// Syntax diagnostics kept before the rest are only counted.
    pub max_diagnostics: usize,
    pub record_trace: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let parse = ParseConfig::default();
        FrontendConfig {
            tab_width: ScanOptions::default().tab_width,
            max_diagnostics: parse.max_diagnostics,
            record_trace: parse.record_trace,
        }
    }
}

impl FrontendConfig {
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_max_diagnostics(mut self, max_diagnostics: usize) -> Self {
        self.max_diagnostics = max_diagnostics;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TAB_WIDTH).contains(&self.tab_width) {
            return Err(ConfigError::InvalidTabWidth(self.tab_width));
        }
        if self.max_diagnostics == 0 {
            return Err(ConfigError::InvalidDiagnosticLimit(self.max_diagnostics));
        }
        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            tab_width: self.tab_width,
        }
    }

    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig {
            max_diagnostics: self.max_diagnostics,
            record_trace: self.record_trace,
        }
    }
}
