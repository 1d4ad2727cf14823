//! Geometric primitives for wireframe shape detection.
//!
//! This module provides the value types used to address cells in an
//! ASCII-art grid and to describe the rectangular regions traced from it.
//!
//! # Overview
//!
//! - [`Position`] - A zero-based (row, column) cell coordinate
//! - [`Bounds`] - An inclusive rectangle between two grid corners
//!
//! # Coordinate System
//!
//! Rows grow downward and columns grow rightward, matching how source
//! lines are read:
//!
//! ```text
//!   (0,0) ────────► +col
//!     │
//!     │
//!     ▼
//!   +row
//! ```
//!
//! Both rectangle extremes are **inclusive**: a box drawn from column 0
//! to column 6 has `left = 0`, `right = 6` and width 7. Degenerate
//! single-row or single-column bounds (`top == bottom` or
//! `left == right`) are representable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A zero-based cell coordinate in a character grid.
///
/// Positions are plain value types with field equality; they carry no
/// reference to the grid they were read from.
///
/// # Examples
///
/// ```
/// # use wireframe_core::geometry::Position;
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
/// assert_eq!(pos.to_string(), "3:6"); // displayed one-based
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position from a zero-based row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Creates a new position with the specified row.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    /// Creates a new position with the specified column.
    pub fn with_col(mut self, col: usize) -> Self {
        self.col = col;
        self
    }
}

impl fmt::Display for Position {
    /// Positions display one-based as `line:column`, the convention
    /// readers expect in diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.col + 1)
    }
}

/// An inclusive rectangle in grid coordinates.
///
/// Invariant: `top <= bottom` and `left <= right`. Because both ends
/// are inclusive, `width` and `height` are always at least 1.
///
/// # Examples
///
/// ```
/// # use wireframe_core::geometry::{Bounds, Position};
/// let bounds = Bounds::new(0, 0, 2, 6);
/// assert_eq!(bounds.width(), 7);
/// assert_eq!(bounds.height(), 3);
/// assert_eq!(bounds.area(), 21);
/// assert_eq!(bounds.top_left(), Position::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Bounds {
    /// Creates bounds from inclusive extremes.
    ///
    /// Debug builds assert the `top <= bottom && left <= right`
    /// invariant; use [`Bounds::from_corners`] when the corner order is
    /// not known up front.
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        debug_assert!(top <= bottom, "bounds invariant: top <= bottom");
        debug_assert!(left <= right, "bounds invariant: left <= right");
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates bounds spanning two corner positions, normalizing their
    /// order.
    pub fn from_corners(a: Position, b: Position) -> Self {
        Self {
            top: a.row().min(b.row()),
            left: a.col().min(b.col()),
            bottom: a.row().max(b.row()),
            right: a.col().max(b.col()),
        }
    }

    /// Returns the inclusive top row.
    pub fn top(self) -> usize {
        self.top
    }

    /// Returns the inclusive left column.
    pub fn left(self) -> usize {
        self.left
    }

    /// Returns the inclusive bottom row.
    pub fn bottom(self) -> usize {
        self.bottom
    }

    /// Returns the inclusive right column.
    pub fn right(self) -> usize {
        self.right
    }

    /// Returns the top-left corner as a position.
    pub fn top_left(self) -> Position {
        Position::new(self.top, self.left)
    }

    /// Returns the bottom-right corner as a position.
    pub fn bottom_right(self) -> Position {
        Position::new(self.bottom, self.right)
    }

    /// Returns the inclusive width in columns.
    pub fn width(self) -> usize {
        self.right - self.left + 1
    }

    /// Returns the inclusive height in rows.
    pub fn height(self) -> usize {
        self.bottom - self.top + 1
    }

    /// Returns the number of cells covered by the bounds.
    pub fn area(self) -> usize {
        self.width() * self.height()
    }

    /// Checks whether `inner` is strictly contained in `self`.
    ///
    /// Containment is strict on all four edges: bounds that touch or
    /// share an edge are *not* contained. In particular no bounds
    /// contain themselves, so a box can never be classified as its own
    /// parent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wireframe_core::geometry::Bounds;
    /// let outer = Bounds::new(0, 0, 10, 10);
    /// let inner = Bounds::new(2, 2, 5, 5);
    /// assert!(outer.contains(inner));
    /// assert!(!inner.contains(outer));
    /// assert!(!outer.contains(outer));
    /// ```
    pub fn contains(self, inner: Bounds) -> bool {
        self.top < inner.top
            && self.left < inner.left
            && self.bottom > inner.bottom
            && self.right > inner.right
    }

    /// Checks whether two bounds share at least one cell.
    ///
    /// Intervals are inclusive on both axes, so bounds that merely
    /// touch along an edge do overlap.
    pub fn overlaps(self, other: Bounds) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// Checks whether two bounds overlap without either containing the
    /// other.
    ///
    /// This is the illegal configuration for box hierarchies: partial
    /// overlap makes parent/child assignment ambiguous.
    pub fn overlaps_partially(self, other: Bounds) -> bool {
        self.overlaps(other) && !self.contains(other) && !other.contains(self)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.top, self.left, self.bottom, self.right
        )
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (0usize..100, 0usize..100, 0usize..40, 0usize..40)
            .prop_map(|(top, left, h, w)| Bounds::new(top, left, top + h, left + w))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Width and height always round-trip through the inclusive
    /// extremes.
    fn check_dimension_roundtrip(b: Bounds) -> Result<(), TestCaseError> {
        prop_assert_eq!(b.width(), b.right() - b.left() + 1);
        prop_assert_eq!(b.height(), b.bottom() - b.top() + 1);
        prop_assert_eq!(b.area(), b.width() * b.height());
        Ok(())
    }

    /// Any pair of bounds falls into exactly one spatial class:
    /// `a` contains `b`, `b` contains `a`, partial overlap, or
    /// fully disjoint.
    fn check_spatial_classes_are_exclusive(a: Bounds, b: Bounds) -> Result<(), TestCaseError> {
        let classes = [
            a.contains(b),
            b.contains(a),
            a.overlaps_partially(b),
            !a.overlaps(b),
        ];
        prop_assert_eq!(classes.iter().filter(|&&c| c).count(), 1);
        Ok(())
    }

    /// Containment implies overlap and a strictly smaller area.
    fn check_containment_implies_overlap(a: Bounds, b: Bounds) -> Result<(), TestCaseError> {
        if a.contains(b) {
            prop_assert!(a.overlaps(b));
            prop_assert!(b.area() < a.area());
            prop_assert!(!b.contains(a));
        }
        Ok(())
    }

    /// Overlap is symmetric.
    fn check_overlap_is_symmetric(a: Bounds, b: Bounds) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.overlaps(b), b.overlaps(a));
        Ok(())
    }

    /// Normalized corner construction always satisfies the invariant.
    fn check_from_corners_invariant(a: Position, b: Position) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_corners(a, b);
        prop_assert!(bounds.top() <= bounds.bottom());
        prop_assert!(bounds.left() <= bounds.right());
        Ok(())
    }

    fn position_strategy() -> impl Strategy<Value = Position> {
        (0usize..200, 0usize..200).prop_map(|(row, col)| Position::new(row, col))
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn dimension_roundtrip(b in bounds_strategy()) {
            check_dimension_roundtrip(b)?;
        }

        #[test]
        fn spatial_classes_are_exclusive(a in bounds_strategy(), b in bounds_strategy()) {
            check_spatial_classes_are_exclusive(a, b)?;
        }

        #[test]
        fn containment_implies_overlap(a in bounds_strategy(), b in bounds_strategy()) {
            check_containment_implies_overlap(a, b)?;
        }

        #[test]
        fn overlap_is_symmetric(a in bounds_strategy(), b in bounds_strategy()) {
            check_overlap_is_symmetric(a, b)?;
        }

        #[test]
        fn from_corners_invariant(a in position_strategy(), b in position_strategy()) {
            check_from_corners_invariant(a, b)?;
        }
    }
}
