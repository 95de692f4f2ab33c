//! Diagnostic system for data-flow findings.
//!
//! A diagnostic carries:
//! - An error code for searchability
//! - A clear message (what may go wrong)
//! - A primary span (where)
//! - Secondary labels and notes (why)
//!
//! Problem records are rendered into [`Diagnostic`] values, collected in a
//! [`DiagnosticQueue`](queue::DiagnosticQueue) that limits, deduplicates and
//! orders them, and finally written out by an
//! [`emitter`](emitter::DiagnosticEmitter).

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use queue::{DiagnosticConfig, DiagnosticQueue};
