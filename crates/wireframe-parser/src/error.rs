//! Error and diagnostic system for wireframe shape detection.
//!
//! This module provides the diagnostic machinery the detector uses to
//! report malformed input without stopping at the first problem:
//! - Structured error codes carrying exact grid positions
//! - Severity levels distinguishing hard errors from advisory warnings
//! - A collector for accumulating diagnostics across a whole pass
//!
//! # Overview
//!
//! The system is built around [`Diagnostic`], a single error or warning
//! derived from an [`ErrorCode`]. The code carries the structured
//! payload (positions, widths, depths); the diagnostic adds the
//! severity, the rendered message, and an optional source snippet.
//! Multiple diagnostics are wrapped in [`ParseError`] when a
//! result-shaped API is needed.
//!
//! # Example
//!
//! ```
//! # use wireframe_parser::error::{Diagnostic, ErrorCode};
//! # use wireframe_parser::Position;
//!
//! let diag = Diagnostic::from_code(ErrorCode::MismatchedWidth {
//!     top_left: Position::new(0, 0),
//!     top_width: 6,
//!     bottom_width: 8,
//! });
//!
//! assert!(diag.severity().is_error());
//! assert_eq!(
//!     diag.to_string(),
//!     "error[E102]: box at 1:1 has mismatched widths: top is 6, bottom is 8",
//! );
//! ```

mod code;
mod collector;
mod diagnostic;
mod parse_error;
mod severity;

pub use code::ErrorCode;
pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use severity::Severity;
