//! Severity levels for diagnostics.
//!
//! Severity distinguishes structural failures, which exclude a box from
//! the detected forest, from advisory warnings that never block
//! detection.

use std::fmt;

/// The severity level of a diagnostic.
///
/// - [`Severity::Error`] marks a structural problem: the affected box
///   (or, for overlaps, the whole hierarchy) cannot be built.
/// - [`Severity::Warning`] marks an advisory issue such as a misaligned
///   border or excessive nesting; detection still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A structural error in the traced input.
    Error,

    /// A non-fatal warning about suspicious but tolerated input.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
