//! The shape detection pipeline.
//!
//! [`ShapeDetector::detect`] runs the full pass over a grid: candidate
//! corners are enumerated from the corner index, each candidate is
//! traced into a [`Frame`] or a diagnostic, duplicate traces of the
//! same outline are collapsed, interior alignment warnings are
//! collected, and the surviving frames are assembled into a forest
//! with deep-nesting warnings on top.
//!
//! Detection never short-circuits. Every diagnostic the input earns is
//! collected, and [`Detection`] carries both the forest and the full
//! diagnostic list so callers choose between lenient and strict
//! consumption.

use std::collections::HashSet;

use log::{debug, trace};

use wireframe_core::{Bounds, Frame, Position};

use crate::error::{Diagnostic, DiagnosticCollector, ParseError};
use crate::grid::{CellChar, Direction, Grid};
use crate::hierarchy;
use crate::tracer;

/// Tunable knobs for a detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Nesting depth above which boxes earn a deep-nesting warning.
    /// Roots are depth 0.
    pub nesting_threshold: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            nesting_threshold: 4,
        }
    }
}

/// The outcome of one detection pass: the box forest plus every
/// diagnostic the input produced, in emission order.
#[derive(Debug)]
pub struct Detection {
    roots: Vec<Frame>,
    diagnostics: Vec<Diagnostic>,
}

impl Detection {
    /// The detected root boxes, in trace order.
    pub fn roots(&self) -> &[Frame] {
        &self.roots
    }

    /// Every collected diagnostic, errors and warnings interleaved in
    /// the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The error-severity diagnostics only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity().is_error())
    }

    /// The warning-severity diagnostics only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity().is_warning())
    }

    /// Returns `true` if any error-severity diagnostic was collected.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity().is_error())
    }

    /// Splits the detection into its forest and diagnostics.
    pub fn into_parts(self) -> (Vec<Frame>, Vec<Diagnostic>) {
        (self.roots, self.diagnostics)
    }

    /// Strict consumption: `Err` carrying every diagnostic if any
    /// error was collected, otherwise the forest plus any warnings.
    pub fn into_result(self) -> Result<(Vec<Frame>, Vec<Diagnostic>), ParseError> {
        if self.has_errors() {
            Err(ParseError::from(self.diagnostics))
        } else {
            Ok((self.roots, self.diagnostics))
        }
    }
}

/// Detects the box forest drawn on a grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeDetector {
    config: DetectorConfig,
}

impl ShapeDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Runs the full detection pass.
    ///
    /// Tracing failures, width mismatches, and alignment warnings are
    /// all collected without stopping the pass. An overlap between two
    /// traced boxes makes every containment relation ambiguous, so it
    /// empties the forest while keeping the diagnostics.
    pub fn detect(&self, grid: &Grid) -> Detection {
        let mut collector = DiagnosticCollector::new();
        let mut frames: Vec<Frame> = Vec::new();
        let mut seen: HashSet<Bounds> = HashSet::new();

        debug!(corners = grid.corners().len(), width = grid.width(), height = grid.height();
            "detecting boxes");

        for &corner in grid.corners() {
            if !is_top_left_candidate(grid, corner) {
                continue;
            }
            match tracer::trace_frame(grid, corner) {
                Ok(frame) => {
                    // The same outline can be entered through a corner
                    // that doubles as another box's; keep one copy.
                    if seen.insert(frame.bounds()) {
                        frames.push(frame);
                    } else {
                        trace!(corner:% = corner; "duplicate outline skipped");
                    }
                }
                Err(diagnostic) => collector.emit(diagnostic),
            }
        }

        for frame in &frames {
            collector.extend(tracer::validate_interior_alignment(grid, frame.bounds()));
        }

        let roots = match hierarchy::build_hierarchy(frames) {
            Ok(roots) => {
                collector.extend(hierarchy::collect_deep_nesting(
                    &roots,
                    self.config.nesting_threshold,
                ));
                roots
            }
            Err(err) => {
                collector.emit(err.into());
                Vec::new()
            }
        };

        debug!(roots = roots.len(), diagnostics = collector.len(), errors = collector.has_errors();
            "detection finished");

        Detection {
            roots,
            diagnostics: collector.into_diagnostics(),
        }
    }
}

/// Cheap pre-filter for corners worth tracing as a top-left.
///
/// A top-left corner continues rightward into a top border (a dash,
/// another corner, or a name character) and downward into a left
/// border. Without the filter every box would be entered through all
/// four of its corners, turning one well-formed box into three bogus
/// unclosed-box errors.
///
/// `=` is deliberately not accepted rightward: a divider row's left
/// endpoint is a section seam, not a box origin.
fn is_top_left_candidate(grid: &Grid, corner: Position) -> bool {
    let rightward = Direction::Right
        .step(corner)
        .and_then(|pos| grid.get(pos))
        .is_some_and(|cell| match cell {
            CellChar::HLine | CellChar::Corner => true,
            CellChar::Other(c) => !c.is_whitespace(),
            _ => false,
        });
    let downward = Direction::Down
        .step(corner)
        .and_then(|pos| grid.get(pos))
        .is_some_and(CellChar::is_vertical_border);

    rightward && downward
}
