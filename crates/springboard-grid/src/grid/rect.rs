use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Footprint, GridPosition, COLUMNS, ROWS};

/// Axis-aligned block of cells: an anchor plus a footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRect {
    /// Top-left cell
    pub origin: GridPosition,
    /// Size in cells
    pub footprint: Footprint,
}

impl CellRect {
    /// Create a new cell rectangle
    pub const fn new(origin: GridPosition, footprint: Footprint) -> Self {
        Self { origin, footprint }
    }

    /// One past the last covered column
    pub fn right(&self) -> u16 {
        u16::from(self.origin.col) + u16::from(self.footprint.width())
    }

    /// One past the last covered row
    pub fn bottom(&self) -> u16 {
        u16::from(self.origin.row) + u16::from(self.footprint.height())
    }

    /// Check that every covered cell lies on the page
    pub fn in_bounds(&self) -> bool {
        self.right() <= u16::from(COLUMNS) && self.bottom() <= u16::from(ROWS)
    }

    /// Check if a cell is covered
    pub fn contains(&self, pos: GridPosition) -> bool {
        pos.row >= self.origin.row
            && u16::from(pos.row) < self.bottom()
            && pos.col >= self.origin.col
            && u16::from(pos.col) < self.right()
    }

    /// Check if two rectangles share at least one cell
    pub fn intersects(&self, other: &CellRect) -> bool {
        u16::from(self.origin.col) < other.right()
            && self.right() > u16::from(other.origin.col)
            && u16::from(self.origin.row) < other.bottom()
            && self.bottom() > u16::from(other.origin.row)
    }

    /// Covered cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> {
        let origin = self.origin;
        let (width, height) = (self.footprint.width(), self.footprint.height());
        (0..height).flat_map(move |r| (0..width).filter_map(move |c| origin.offset(r, c)))
    }

    /// Covered cells as a set
    pub fn cell_set(&self) -> BTreeSet<GridPosition> {
        self.cells().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(row: u8, col: u8, width: u8, height: u8) -> CellRect {
        CellRect::new(
            GridPosition::new(row, col),
            Footprint::new(width, height).unwrap(),
        )
    }

    #[test]
    fn test_cells_widget() {
        let cells: Vec<_> = rect(2, 2, 2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                GridPosition::new(2, 2),
                GridPosition::new(2, 3),
                GridPosition::new(3, 2),
                GridPosition::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_contains() {
        let r = rect(1, 1, 2, 3);
        assert!(r.contains(GridPosition::new(1, 1)));
        assert!(r.contains(GridPosition::new(3, 2)));
        assert!(!r.contains(GridPosition::new(4, 1)));
        assert!(!r.contains(GridPosition::new(1, 3)));
        assert!(!r.contains(GridPosition::new(0, 1)));
    }

    #[test]
    fn test_intersects_edges() {
        let a = rect(0, 0, 2, 2);
        assert!(a.intersects(&rect(1, 1, 1, 1)));
        assert!(!a.intersects(&rect(0, 2, 2, 2)));
        assert!(!a.intersects(&rect(2, 0, 1, 1)));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_in_bounds() {
        assert!(rect(4, 2, 2, 2).in_bounds());
        assert!(!rect(5, 3, 2, 2).in_bounds());
        assert!(!rect(200, 0, 1, 1).in_bounds());
    }
}
