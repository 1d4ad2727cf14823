//! Box boundary tracing.
//!
//! [`trace_frame`] walks the four edges of a candidate box clockwise
//! from its top-left corner, extracting the optional name embedded in
//! the top border and validating that the outline actually closes.
//! Every edge uses the grid's stop-before [`scan`](crate::Grid::scan)
//! semantics, so a failed edge pinpoints the exact cell that broke the
//! pattern.
//!
//! [`validate_interior_alignment`] is the warning-only companion pass:
//! it never blocks a successful trace, it only flags interior rows
//! whose closing border sits at the wrong column.

use std::fmt;

use log::trace;

use wireframe_core::{Bounds, Frame, Position};

use crate::error::{Diagnostic, ErrorCode};
use crate::grid::{CellChar, Grid};
use crate::snippet;

/// The edge of a box named in unclosed-box diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => write!(f, "top"),
            Edge::Right => write!(f, "right"),
            Edge::Bottom => write!(f, "bottom"),
            Edge::Left => write!(f, "left"),
        }
    }
}

/// Finds the first corner in a scan run, skipping the starting cell.
fn next_corner(run: &[(Position, CellChar)]) -> Option<Position> {
    run.iter()
        .skip(1)
        .find(|(_, cell)| cell.is_corner())
        .map(|(pos, _)| *pos)
}

fn unclosed(grid: &Grid, corner: Position, edge: Edge) -> Diagnostic {
    Diagnostic::from_code(ErrorCode::UnclosedBox { corner, edge })
        .with_snippet(snippet::render(grid, corner))
}

/// Traces the single box whose top-left corner is `top_left`.
///
/// The caller is responsible for only invoking this on `+` cells; the
/// detector enumerates candidates from the grid's corner index.
///
/// The four edges are walked in order:
///
/// 1. **Top**: rightward over any non-whitespace run (names are
///    embedded in the border), terminated by the next corner.
/// 2. **Right**: downward over `|` cells to the bottom-right corner.
/// 3. **Bottom**: leftward over `-`/`=` cells to the bottom-left
///    corner; its inclusive width must equal the top edge's.
/// 4. **Left**: upward over `|` cells, which must land exactly back on
///    `top_left`. A vertical border shifted even one column lands this
///    scan elsewhere and is reported as an unclosed left edge.
///
/// On success the returned [`Frame`] has no children; nesting is the
/// hierarchy builder's job.
pub fn trace_frame(grid: &Grid, top_left: Position) -> Result<Frame, Diagnostic> {
    trace!(corner:% = top_left; "tracing box");

    // Top edge: tolerate an embedded name, stop on whitespace.
    let top_run = grid.scan_right(top_left, |cell| !cell.is_whitespace());
    let Some(top_right) = next_corner(&top_run) else {
        return Err(unclosed(grid, top_left, Edge::Top));
    };
    let top_width = top_right.col() - top_left.col() + 1;

    let name = extract_name(grid, top_left, top_right);

    // Right edge.
    let right_run = grid.scan_down(top_right, CellChar::is_vertical_border);
    let Some(bottom_right) = next_corner(&right_run) else {
        return Err(unclosed(grid, top_left, Edge::Right));
    };

    // Bottom edge, scanned right-to-left.
    let bottom_run = grid.scan_left(bottom_right, |cell| {
        matches!(cell, CellChar::HLine | CellChar::Divider | CellChar::Corner)
    });
    let Some(bottom_left) = next_corner(&bottom_run) else {
        return Err(unclosed(grid, top_left, Edge::Bottom));
    };
    let bottom_width = bottom_right.col() - bottom_left.col() + 1;
    if bottom_width != top_width {
        return Err(Diagnostic::from_code(ErrorCode::MismatchedWidth {
            top_left,
            top_width,
            bottom_width,
        })
        .with_snippet(snippet::render(grid, bottom_left)));
    }

    // Left edge must close the loop exactly where the trace started.
    let left_run = grid.scan_up(bottom_left, CellChar::is_vertical_border);
    if next_corner(&left_run) != Some(top_left) {
        return Err(unclosed(grid, top_left, Edge::Left));
    }

    let bounds = Bounds::from_corners(top_left, bottom_right);
    trace!(bounds:% = bounds; "traced box");
    Ok(Frame::new(name, bounds))
}

/// Extracts the optional name embedded in a top border.
///
/// The characters strictly between the two corners are stripped of
/// their `-` padding and whitespace-trimmed; an all-dash border yields
/// no name. `+--Login--+` names the box `Login`.
fn extract_name(grid: &Grid, top_left: Position, top_right: Position) -> Option<String> {
    let line = grid.line_text(top_left.row())?;
    let interior: String = line
        .chars()
        .skip(top_left.col() + 1)
        .take(top_right.col().saturating_sub(top_left.col() + 1))
        .collect();
    let name = interior.trim_matches('-').trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Checks every interior row of a traced box for a closing border at
/// the expected column.
///
/// Purely diagnostic: the returned warnings accompany a successful
/// trace, they never invalidate it. A row whose cell at
/// `(row, bounds.right)` is a vertical border is aligned; otherwise
/// the row is scanned from just inside the left border and the first
/// `|` or `+` found is reported at its actual column. A row with no
/// closing character at all is left to the tracer, which reports the
/// broken edge itself.
pub fn validate_interior_alignment(grid: &Grid, bounds: Bounds) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();

    for row in bounds.top() + 1..bounds.bottom() {
        let expected = Position::new(row, bounds.right());
        if grid.get(expected).is_some_and(CellChar::is_vertical_border) {
            continue;
        }

        let found = (bounds.left() + 1..grid.width())
            .map(|col| Position::new(row, col))
            .find_map(|pos| grid.get(pos).filter(|c| c.is_vertical_border()).map(|c| (pos, c)));

        if let Some((pos, cell)) = found {
            let code = match cell {
                CellChar::VLine => ErrorCode::MisalignedPipe {
                    position: pos,
                    expected_col: bounds.right(),
                    actual_col: pos.col(),
                },
                _ => ErrorCode::MisalignedClosingBorder {
                    row,
                    expected_col: bounds.right(),
                    actual_col: pos.col(),
                },
            };
            warnings.push(Diagnostic::from_code(code).with_snippet(snippet::render(grid, pos)));
        }
    }

    warnings
}
