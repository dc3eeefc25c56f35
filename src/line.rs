//! Symbolic winning-line descriptors.
//!
//! The engine reports a won game as a [`Line`] rather than pixel
//! coordinates. The presentation layer maps the line's cells (or its two
//! endpoints) to screen space at render time.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// One of the 8 fixed winning triples.
///
/// [`Line::ALL`] lists the lines in scan order: rows top-to-bottom, then
/// columns left-to-right, then the two diagonals. Win detection reports
/// the first matching line in this order, which is the tie-break when a
/// single move completes two lines at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Diagonal from top-left to bottom-right.
    MainDiagonal,
    /// Diagonal from top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All 8 lines in scan order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells of this line, in drawing order.
    pub fn cells(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::MiddleRow => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Line::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::LeftColumn => [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Line::CenterColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// The two endpoint cells of this line.
    ///
    /// A renderer highlighting the win draws a stroke between these two
    /// cell centers.
    pub fn endpoints(self) -> (Position, Position) {
        let [start, _, end] = self.cells();
        (start, end)
    }

    /// Checks whether this line passes through the given position.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Line::TopRow => "top row",
            Line::MiddleRow => "middle row",
            Line::BottomRow => "bottom row",
            Line::LeftColumn => "left column",
            Line::CenterColumn => "center column",
            Line::RightColumn => "right column",
            Line::MainDiagonal => "main diagonal",
            Line::AntiDiagonal => "anti-diagonal",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_rows_then_columns_then_diagonals() {
        assert_eq!(Line::ALL[0], Line::TopRow);
        assert_eq!(Line::ALL[3], Line::LeftColumn);
        assert_eq!(Line::ALL[6], Line::MainDiagonal);
        assert_eq!(Line::ALL[7], Line::AntiDiagonal);
    }

    #[test]
    fn test_endpoints_are_first_and_last_cell() {
        let (start, end) = Line::AntiDiagonal.endpoints();
        assert_eq!(start, Position::TopRight);
        assert_eq!(end, Position::BottomLeft);
    }

    #[test]
    fn test_every_line_has_three_distinct_cells() {
        for line in Line::ALL {
            let [a, b, c] = line.cells();
            assert_ne!(a, b);
            assert_ne!(b, c);
            assert_ne!(a, c);
        }
    }

    #[test]
    fn test_center_belongs_to_four_lines() {
        let through_center = Line::ALL
            .iter()
            .filter(|line| line.contains(Position::Center))
            .count();
        assert_eq!(through_center, 4);
    }
}
