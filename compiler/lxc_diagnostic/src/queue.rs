//! Diagnostic queue with an error limit.
//!
//! Collects diagnostics in the order they are raised. Once the limit is
//! reached further diagnostics are counted but not stored, so a badly
//! broken input cannot flood the caller.

use crate::Diagnostic;

/// Default maximum number of stored diagnostics.
pub const DEFAULT_ERROR_LIMIT: usize = 100;

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics to keep (0 = unlimited).
    pub error_limit: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: DEFAULT_ERROR_LIMIT,
        }
    }
}

/// Append-only collection of diagnostics.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    config: DiagnosticConfig,
    suppressed: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            config,
            suppressed: 0,
        }
    }

    /// Add a diagnostic. Returns `false` if the limit dropped it.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if self.limit_reached() {
            self.suppressed += 1;
            return false;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit != 0 && self.diagnostics.len() >= self.config.error_limit
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics dropped by the limit.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the stored diagnostics in the order they were added.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests;
