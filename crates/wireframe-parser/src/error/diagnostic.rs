//! The core diagnostic type for the wireframe error system.
//!
//! A [`Diagnostic`] is a single error or warning derived from an
//! [`ErrorCode`], with the rendered message and an optional source
//! snippet for presentation layers that have no grid access.

use std::fmt;

use crate::error::{ErrorCode, Severity};

/// A single diagnostic message produced during shape detection.
///
/// Diagnostics carry:
/// - The structured [`ErrorCode`] including its positional payload
/// - The severity derived from that code
/// - A rendered human-readable message
/// - An optional pre-formatted source snippet
///
/// # Example
///
/// ```text
/// error[E101]: box starting at 1:1 is not closed along its top edge
///  1 | +-----
///    | ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: ErrorCode,
    message: String,
    snippet: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic from a structured error code.
    ///
    /// Severity and message are derived from the code, so every
    /// diagnostic for a given code is rendered consistently.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            severity: code.severity(),
            message: code.message(),
            code,
            snippet: None,
        }
    }

    /// Attaches a pre-formatted source snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Gets the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Gets the structured error code.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Gets the rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the source snippet, if one was attached.
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E101]: message"
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use wireframe_core::Position;

    use super::*;
    use crate::tracer::Edge;

    fn unclosed() -> ErrorCode {
        ErrorCode::UnclosedBox {
            corner: Position::new(0, 0),
            edge: Edge::Top,
        }
    }

    #[test]
    fn test_from_code_derives_severity_and_message() {
        let diag = Diagnostic::from_code(unclosed());

        assert!(diag.severity().is_error());
        assert_eq!(
            diag.message(),
            "box starting at 1:1 is not closed along its top edge"
        );
        assert!(diag.snippet().is_none());
    }

    #[test]
    fn test_with_snippet() {
        let diag = Diagnostic::from_code(unclosed()).with_snippet(" 1 | +-----\n   | ^");

        assert_eq!(diag.snippet(), Some(" 1 | +-----\n   | ^"));
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::from_code(unclosed());
        assert_eq!(
            diag.to_string(),
            "error[E101]: box starting at 1:1 is not closed along its top edge"
        );
    }

    #[test]
    fn test_warning_display() {
        let diag = Diagnostic::from_code(ErrorCode::DeepNesting {
            depth: 5,
            position: Position::new(9, 9),
        });
        assert_eq!(
            diag.to_string(),
            "warning[W301]: box at 10:10 is nested 5 levels deep"
        );
    }
}
