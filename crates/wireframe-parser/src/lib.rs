//! Shape detection for ASCII-art wireframes.
//!
//! This crate turns lines of `+ - | =` box drawings into a validated
//! forest of rectangular [`Frame`]s with parent/child nesting, plus a
//! complete list of diagnostics for everything malformed along the
//! way. Detection never stops at the first problem: broken boxes are
//! reported individually while well-formed neighbors still come out.
//!
//! The pipeline is layered bottom-up:
//!
//! - [`Grid`] classifies the input into a rectangular cell field with
//!   directional scanning and per-character-kind indices.
//! - [`trace_frame`] walks one candidate box's four edges, extracting
//!   its optional embedded name.
//! - [`build_hierarchy`] turns the flat traced boxes into a forest by
//!   strict spatial containment.
//! - [`ShapeDetector`] orchestrates the whole pass and collects every
//!   diagnostic into a [`Detection`].
//!
//! # Examples
//!
//! ```
//! use wireframe_parser::{Grid, ShapeDetector};
//!
//! let grid = Grid::from_lines(&[
//!     "+--Login--+",
//!     "|         |",
//!     "+---------+",
//! ]);
//! let detection = ShapeDetector::default().detect(&grid);
//!
//! assert!(!detection.has_errors());
//! assert_eq!(detection.roots().len(), 1);
//! assert_eq!(detection.roots()[0].name(), Some("Login"));
//! ```

pub mod error;

mod detector;
mod grid;
mod hierarchy;
mod snippet;
mod tracer;

pub use detector::{Detection, DetectorConfig, ShapeDetector};
pub use grid::{CellChar, Direction, Grid};
pub use hierarchy::{
    HierarchyError, build_hierarchy, collect_deep_nesting, depth_of, find_parent, max_depth,
};
pub use snippet::render as render_snippet;
pub use tracer::{Edge, trace_frame, validate_interior_alignment};

pub use wireframe_core::{Bounds, Frame, Position};

/// Convenience entry point: builds the grid and runs one detection
/// pass over already-split lines.
///
/// ```
/// use wireframe_parser::{DetectorConfig, detect_lines};
///
/// let detection = detect_lines(
///     &["+-----+", "|     |", "+-----+"],
///     DetectorConfig::default(),
/// );
/// assert_eq!(detection.roots().len(), 1);
/// ```
pub fn detect_lines<S: AsRef<str>>(lines: &[S], config: DetectorConfig) -> Detection {
    ShapeDetector::new(config).detect(&Grid::from_lines(lines))
}
