//! Collector for accumulating diagnostics during a detection pass.
//!
//! The [`DiagnosticCollector`] lets the detector report every error and
//! warning it finds instead of failing on the first one, so a single
//! malformed box never hides problems elsewhere in the same input.

use crate::error::Diagnostic;

/// A collector for accumulating diagnostics during a detection pass.
///
/// # Example
///
/// ```
/// # use wireframe_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
/// # use wireframe_parser::{Edge, Position};
/// let mut collector = DiagnosticCollector::new();
///
/// collector.emit(Diagnostic::from_code(ErrorCode::UnclosedBox {
///     corner: Position::new(0, 0),
///     edge: Edge::Top,
/// }));
/// collector.emit(Diagnostic::from_code(ErrorCode::DeepNesting {
///     depth: 5,
///     position: Position::new(4, 4),
/// }));
///
/// assert!(collector.has_errors());
/// assert_eq!(collector.into_diagnostics().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Creates a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a diagnostic to this collector.
    ///
    /// Error-severity diagnostics additionally mark the collector as
    /// failed.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Emits every diagnostic from an iterator.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Returns `true` if any error-severity diagnostic was emitted.
    ///
    /// Warnings alone never mark the collector as failed.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Returns the number of diagnostics collected so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finishes collection, returning every diagnostic in emission
    /// order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use wireframe_core::Position;

    use super::*;
    use crate::error::ErrorCode;
    use crate::tracer::Edge;

    fn error_diag() -> Diagnostic {
        Diagnostic::from_code(ErrorCode::UnclosedBox {
            corner: Position::new(0, 0),
            edge: Edge::Top,
        })
    }

    fn warning_diag() -> Diagnostic {
        Diagnostic::from_code(ErrorCode::DeepNesting {
            depth: 5,
            position: Position::new(2, 2),
        })
    }

    #[test]
    fn test_collector_starts_empty() {
        let collector = DiagnosticCollector::new();
        assert!(collector.is_empty());
        assert!(!collector.has_errors());
        assert!(collector.into_diagnostics().is_empty());
    }

    #[test]
    fn test_warnings_do_not_mark_errors() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(warning_diag());

        assert!(!collector.has_errors());
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_errors_mark_failure() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(warning_diag());
        collector.emit(error_diag());

        assert!(collector.has_errors());
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut collector = DiagnosticCollector::new();
        collector.extend([error_diag(), warning_diag()]);

        let diagnostics = collector.into_diagnostics();
        assert!(diagnostics[0].severity().is_error());
        assert!(diagnostics[1].severity().is_warning());
    }
}
