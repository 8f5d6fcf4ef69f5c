//! Diagnostic records for the LXC front end.
//!
//! A [`Diagnostic`] is plain data: an [`ErrorCode`] for searchability, a
//! message saying what went wrong, the 1-based position where it went
//! wrong, and the offending lexeme. Rendering is left to callers.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
