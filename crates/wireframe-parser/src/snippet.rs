//! Source snippet rendering for diagnostics.
//!
//! A snippet shows the offending grid line with a one-based line number
//! gutter and a caret pointing at the reported column:
//!
//! ```text
//!  3 | +-----+
//!    |       ^
//! ```

use wireframe_core::Position;

use crate::grid::Grid;

/// Renders the line holding `position` with a caret under its column.
///
/// Positions past the grid still render: an out-of-range row yields an
/// empty source line, and the caret sits wherever the column says.
pub fn render(grid: &Grid, position: Position) -> String {
    let line = grid.line_text(position.row()).unwrap_or("");
    let number = position.row() + 1;
    let gutter_width = number.to_string().len();

    format!(
        "{number:>gutter_width$} | {line}\n{blank:>gutter_width$} | {caret:>caret_width$}",
        blank = "",
        caret = "^",
        caret_width = position.col() + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_under_column() {
        let grid = Grid::from_lines(&["+-----+", "|     |", "+-----+"]);
        let snippet = render(&grid, Position::new(0, 6));

        assert_eq!(snippet, "1 | +-----+\n  |       ^");
    }

    #[test]
    fn test_one_based_line_number() {
        let grid = Grid::from_lines(&["+-----+", "|     |", "+-----+"]);
        let snippet = render(&grid, Position::new(2, 0));

        assert_eq!(snippet, "3 | +-----+\n  | ^");
    }

    #[test]
    fn test_gutter_widens_for_two_digit_lines() {
        let lines: Vec<String> = (0..12).map(|_| String::from("|  |")).collect();
        let grid = Grid::from_lines(&lines);
        let snippet = render(&grid, Position::new(9, 1));

        assert_eq!(snippet, "10 | |  |\n   |  ^");
    }

    #[test]
    fn test_row_past_grid_renders_empty_line() {
        let grid = Grid::from_lines(&["+--+"]);
        let snippet = render(&grid, Position::new(5, 2));

        assert_eq!(snippet, "6 | \n  |   ^");
    }
}
