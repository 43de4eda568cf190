use serde::{Deserialize, Serialize};

use super::{COLUMNS, ROWS};

/// A cell on a page, addressed by row and column
///
/// Positions are plain values: equality is by value and the derived ordering
/// is row-major (top-to-bottom, then left-to-right), which is the scan order
/// used by placement search.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GridPosition {
    /// Row, 0 at the top
    pub row: u8,
    /// Column, 0 at the left
    pub col: u8,
}

impl GridPosition {
    /// Top-left cell of a page
    pub const ORIGIN: GridPosition = GridPosition { row: 0, col: 0 };

    /// Create a new position
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check that both components lie inside the page
    pub fn is_valid(&self) -> bool {
        self.row < ROWS && self.col < COLUMNS
    }

    /// Offset by whole cells, `None` if the result leaves `u8` range
    pub fn offset(&self, rows: u8, cols: u8) -> Option<GridPosition> {
        Some(GridPosition::new(
            self.row.checked_add(rows)?,
            self.col.checked_add(cols)?,
        ))
    }

    /// Every cell of a page in row-major order
    pub fn all() -> impl Iterator<Item = GridPosition> {
        (0..ROWS).flat_map(|row| (0..COLUMNS).map(move |col| GridPosition::new(row, col)))
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(GridPosition::new(0, 0).is_valid());
        assert!(GridPosition::new(5, 3).is_valid());
        assert!(!GridPosition::new(6, 0).is_valid());
        assert!(!GridPosition::new(0, 4).is_valid());
    }

    #[test]
    fn test_row_major_order() {
        let mut cells = vec![
            GridPosition::new(1, 0),
            GridPosition::new(0, 3),
            GridPosition::new(0, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                GridPosition::new(0, 1),
                GridPosition::new(0, 3),
                GridPosition::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = GridPosition::all().collect();
        assert_eq!(all.first(), Some(&GridPosition::ORIGIN));
        assert_eq!(all[1], GridPosition::new(0, 1));
        assert_eq!(all[4], GridPosition::new(1, 0));
        assert_eq!(all.last(), Some(&GridPosition::new(5, 3)));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_offset_overflow() {
        assert_eq!(
            GridPosition::new(1, 2).offset(1, 1),
            Some(GridPosition::new(2, 3))
        );
        assert_eq!(GridPosition::new(255, 0).offset(1, 0), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&GridPosition::new(2, 3)).unwrap();
        assert_eq!(json, r#"{"row":2,"col":3}"#);
    }
}
