//! Error codes for the wireframe diagnostic system.
//!
//! Codes are organized by phase:
//! - `E1xx` - Box tracing errors
//! - `W2xx` - Alignment warnings
//! - `E3xx`/`W3xx` - Hierarchy errors and warnings
//!
//! Unlike a bare code enum, each variant carries the structured payload
//! (positions, widths, depths) a presentation layer needs to render a
//! precise message, so diagnostics stay machine-readable end to end.

use std::fmt;

use wireframe_core::{Bounds, Position};

use crate::error::Severity;
use crate::tracer::Edge;

/// Structured error codes for shape detection diagnostics.
///
/// Severity is derived deterministically from the code via
/// [`ErrorCode::severity`]; there is no way to emit, say, a
/// warning-level unclosed box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// A box trace ran off the grid before finding the next corner.
    ///
    /// `corner` is the top-left corner the trace started from and
    /// `edge` names the first edge that failed to close.
    UnclosedBox { corner: Position, edge: Edge },

    /// The top and bottom borders of a box span different widths.
    ///
    /// Both widths are inclusive character counts from the left corner
    /// column to the right corner column.
    MismatchedWidth {
        top_left: Position,
        top_width: usize,
        bottom_width: usize,
    },

    /// An interior row closes with a `|` at the wrong column.
    MisalignedPipe {
        position: Position,
        expected_col: usize,
        actual_col: usize,
    },

    /// An interior row closes with a corner at the wrong column.
    MisalignedClosingBorder {
        row: usize,
        expected_col: usize,
        actual_col: usize,
    },

    /// Two boxes overlap without either containing the other, so no
    /// unambiguous hierarchy exists.
    OverlappingBoxes { first: Bounds, second: Bounds },

    /// A box is nested more deeply than the configured threshold.
    DeepNesting { depth: usize, position: Position },
}

impl ErrorCode {
    /// Returns the severity this code always carries.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnclosedBox { .. }
            | Self::MismatchedWidth { .. }
            | Self::OverlappingBoxes { .. } => Severity::Error,

            Self::MisalignedPipe { .. }
            | Self::MisalignedClosingBorder { .. }
            | Self::DeepNesting { .. } => Severity::Warning,
        }
    }

    /// Returns the short display code, e.g. `E101`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnclosedBox { .. } => "E101",
            Self::MismatchedWidth { .. } => "E102",
            Self::MisalignedPipe { .. } => "W201",
            Self::MisalignedClosingBorder { .. } => "W202",
            Self::OverlappingBoxes { .. } => "E301",
            Self::DeepNesting { .. } => "W301",
        }
    }

    /// Renders the human-readable message for this code.
    ///
    /// Rows and columns are shown one-based, matching how editors
    /// display them.
    pub fn message(&self) -> String {
        match self {
            Self::UnclosedBox { corner, edge } => {
                format!("box starting at {corner} is not closed along its {edge} edge")
            }
            Self::MismatchedWidth {
                top_left,
                top_width,
                bottom_width,
            } => format!(
                "box at {top_left} has mismatched widths: top is {top_width}, bottom is {bottom_width}"
            ),
            Self::MisalignedPipe {
                position,
                expected_col,
                actual_col,
            } => format!(
                "vertical border at {position} is misaligned: expected column {}, found column {}",
                expected_col + 1,
                actual_col + 1
            ),
            Self::MisalignedClosingBorder {
                row,
                expected_col,
                actual_col,
            } => format!(
                "closing border on line {} is misaligned: expected column {}, found column {}",
                row + 1,
                expected_col + 1,
                actual_col + 1
            ),
            Self::OverlappingBoxes { first, second } => {
                format!("boxes {first} and {second} overlap without containment")
            }
            Self::DeepNesting { depth, position } => {
                format!("box at {position} is nested {depth} levels deep")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_is_deterministic() {
        let unclosed = ErrorCode::UnclosedBox {
            corner: Position::new(0, 0),
            edge: Edge::Top,
        };
        assert!(unclosed.severity().is_error());

        let deep = ErrorCode::DeepNesting {
            depth: 5,
            position: Position::new(3, 3),
        };
        assert!(deep.severity().is_warning());

        let overlap = ErrorCode::OverlappingBoxes {
            first: Bounds::new(0, 0, 4, 4),
            second: Bounds::new(2, 2, 6, 6),
        };
        assert!(overlap.severity().is_error());
    }

    #[test]
    fn test_display_codes() {
        let unclosed = ErrorCode::UnclosedBox {
            corner: Position::new(0, 0),
            edge: Edge::Left,
        };
        assert_eq!(unclosed.to_string(), "E101");

        let pipe = ErrorCode::MisalignedPipe {
            position: Position::new(1, 5),
            expected_col: 6,
            actual_col: 5,
        };
        assert_eq!(pipe.to_string(), "W201");
    }

    #[test]
    fn test_message_unclosed() {
        let code = ErrorCode::UnclosedBox {
            corner: Position::new(2, 4),
            edge: Edge::Top,
        };
        assert_eq!(
            code.message(),
            "box starting at 3:5 is not closed along its top edge"
        );
    }

    #[test]
    fn test_message_mismatched_width() {
        let code = ErrorCode::MismatchedWidth {
            top_left: Position::new(0, 0),
            top_width: 6,
            bottom_width: 8,
        };
        assert_eq!(
            code.message(),
            "box at 1:1 has mismatched widths: top is 6, bottom is 8"
        );
    }

    #[test]
    fn test_message_columns_are_one_based() {
        let code = ErrorCode::MisalignedClosingBorder {
            row: 2,
            expected_col: 6,
            actual_col: 4,
        };
        assert_eq!(
            code.message(),
            "closing border on line 3 is misaligned: expected column 7, found column 5"
        );
    }
}
