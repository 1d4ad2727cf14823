//! The classified character grid underlying shape detection.
//!
//! [`Grid::from_lines`] normalizes already-split source lines into a
//! rectangular field of [`CellChar`]s: every line is right-padded with
//! spaces to the width of the longest line, every character is
//! classified once, and the positions of the four border character
//! kinds are indexed for O(1)-per-kind enumeration.
//!
//! The grid is immutable after construction. It is the shared
//! collaborator between the shape detector and any downstream content
//! parser: both navigate it through [`Grid::get`], [`Grid::line`], and
//! the directional [`Grid::scan`] primitive.

use wireframe_core::Position;

/// Classification of one grid cell, produced once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChar {
    /// A `+` border corner.
    Corner,
    /// A `-` horizontal border segment.
    HLine,
    /// A `|` vertical border segment.
    VLine,
    /// An `=` horizontal section divider.
    Divider,
    /// A plain space.
    Space,
    /// Any other character, e.g. box names and interior content.
    Other(char),
}

impl CellChar {
    /// Classifies a single character.
    pub fn classify(c: char) -> Self {
        match c {
            '+' => Self::Corner,
            '-' => Self::HLine,
            '|' => Self::VLine,
            '=' => Self::Divider,
            ' ' => Self::Space,
            other => Self::Other(other),
        }
    }

    /// Returns `true` for `+`.
    pub fn is_corner(self) -> bool {
        matches!(self, Self::Corner)
    }

    /// Returns `true` for spaces and any other whitespace character.
    pub fn is_whitespace(self) -> bool {
        match self {
            Self::Space => true,
            Self::Other(c) => c.is_whitespace(),
            _ => false,
        }
    }

    /// Returns `true` for cells that can close a row of a box: a
    /// vertical border or a corner.
    pub fn is_vertical_border(self) -> bool {
        matches!(self, Self::VLine | Self::Corner)
    }

    /// Returns the underlying character.
    pub fn to_char(self) -> char {
        match self {
            Self::Corner => '+',
            Self::HLine => '-',
            Self::VLine => '|',
            Self::Divider => '=',
            Self::Space => ' ',
            Self::Other(c) => c,
        }
    }
}

/// A scanning direction over the grid, one cell per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Steps one cell in this direction.
    ///
    /// Returns `None` when the step would leave the non-negative
    /// quadrant; stepping past the grid's far edges is the grid's job
    /// to detect via [`Grid::get`].
    pub fn step(self, from: Position) -> Option<Position> {
        match self {
            Self::Up => from.row().checked_sub(1).map(|row| from.with_row(row)),
            Self::Down => Some(from.with_row(from.row() + 1)),
            Self::Left => from.col().checked_sub(1).map(|col| from.with_col(col)),
            Self::Right => Some(from.with_col(from.col() + 1)),
        }
    }
}

/// An immutable, rectangular, classified character grid.
///
/// # Examples
///
/// ```
/// # use wireframe_parser::{CellChar, Grid, Position};
/// let grid = Grid::from_lines(&["+--+", "|  |", "+--+"]);
///
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 3);
/// assert_eq!(grid.get(Position::new(0, 0)), Some(CellChar::Corner));
/// assert_eq!(grid.get(Position::new(9, 9)), None);
/// assert_eq!(grid.corners().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellChar>>,
    lines: Vec<String>,
    corners: Vec<Position>,
    h_lines: Vec<Position>,
    v_lines: Vec<Position>,
    dividers: Vec<Position>,
}

impl Grid {
    /// Builds a grid from already-split source lines.
    ///
    /// The width is the longest line's character count; shorter lines
    /// are right-padded with spaces so every row has equal width. The
    /// four border indices are populated in the same single pass.
    /// Empty input yields a valid `0x0` grid.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let width = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let height = lines.len();

        let mut cells = Vec::with_capacity(height);
        let mut padded = Vec::with_capacity(height);
        let mut corners = Vec::new();
        let mut h_lines = Vec::new();
        let mut v_lines = Vec::new();
        let mut dividers = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let mut text = String::with_capacity(width);
            let mut row_cells = Vec::with_capacity(width);
            for (col, c) in line
                .as_ref()
                .chars()
                .chain(std::iter::repeat(' '))
                .take(width)
                .enumerate()
            {
                let cell = CellChar::classify(c);
                match cell {
                    CellChar::Corner => corners.push(Position::new(row, col)),
                    CellChar::HLine => h_lines.push(Position::new(row, col)),
                    CellChar::VLine => v_lines.push(Position::new(row, col)),
                    CellChar::Divider => dividers.push(Position::new(row, col)),
                    _ => {}
                }
                text.push(c);
                row_cells.push(cell);
            }
            cells.push(row_cells);
            padded.push(text);
        }

        Self {
            width,
            height,
            cells,
            lines: padded,
            corners,
            h_lines,
            v_lines,
            dividers,
        }
    }

    /// Returns the uniform row width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Looks up the cell at a position, `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellChar> {
        self.cells.get(pos.row())?.get(pos.col()).copied()
    }

    /// Returns one classified row, `None` when out of bounds.
    pub fn line(&self, row: usize) -> Option<&[CellChar]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Returns one padded source row as text, `None` when out of
    /// bounds. Used for name extraction and snippet rendering.
    pub fn line_text(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Positions of every `+` in the grid, in reading order.
    pub fn corners(&self) -> &[Position] {
        &self.corners
    }

    /// Positions of every `-` in the grid, in reading order.
    pub fn h_lines(&self) -> &[Position] {
        &self.h_lines
    }

    /// Positions of every `|` in the grid, in reading order.
    pub fn v_lines(&self) -> &[Position] {
        &self.v_lines
    }

    /// Positions of every `=` in the grid, in reading order.
    pub fn dividers(&self) -> &[Position] {
        &self.dividers
    }

    /// Walks the grid one cell at a time in `direction`, starting at
    /// (and including) `start`, collecting `(position, cell)` pairs
    /// while `predicate` holds.
    ///
    /// The scan stops *before* the first failing cell, or at the grid
    /// boundary. This stop-before rule is what makes edge arithmetic
    /// unambiguous for the tracer: the run length is the edge length,
    /// and the position one step past the last returned pair is the
    /// cell that broke the pattern.
    pub fn scan(
        &self,
        start: Position,
        direction: Direction,
        predicate: impl Fn(CellChar) -> bool,
    ) -> Vec<(Position, CellChar)> {
        let mut run = Vec::new();
        let mut pos = start;
        loop {
            let Some(cell) = self.get(pos) else { break };
            if !predicate(cell) {
                break;
            }
            run.push((pos, cell));
            let Some(next) = direction.step(pos) else {
                break;
            };
            pos = next;
        }
        run
    }

    /// [`Grid::scan`] toward increasing columns.
    pub fn scan_right(
        &self,
        start: Position,
        predicate: impl Fn(CellChar) -> bool,
    ) -> Vec<(Position, CellChar)> {
        self.scan(start, Direction::Right, predicate)
    }

    /// [`Grid::scan`] toward increasing rows.
    pub fn scan_down(
        &self,
        start: Position,
        predicate: impl Fn(CellChar) -> bool,
    ) -> Vec<(Position, CellChar)> {
        self.scan(start, Direction::Down, predicate)
    }

    /// [`Grid::scan`] toward decreasing columns.
    pub fn scan_left(
        &self,
        start: Position,
        predicate: impl Fn(CellChar) -> bool,
    ) -> Vec<(Position, CellChar)> {
        self.scan(start, Direction::Left, predicate)
    }

    /// [`Grid::scan`] toward decreasing rows.
    pub fn scan_up(
        &self,
        start: Position,
        predicate: impl Fn(CellChar) -> bool,
    ) -> Vec<(Position, CellChar)> {
        self.scan(start, Direction::Up, predicate)
    }
}
