//! Grid geometry for a home screen page
//!
//! Every page is a fixed `COLUMNS × ROWS` grid of cells. Items are recorded
//! by their top-left anchor cell plus a footprint; the covered cells are
//! always derived through [`CellRect`].

mod footprint;
mod position;
mod rect;

pub use footprint::Footprint;
pub use position::GridPosition;
pub use rect::CellRect;

/// Number of columns on every page
pub const COLUMNS: u8 = 4;

/// Number of rows on every page
pub const ROWS: u8 = 6;

/// Addressable cells per page
pub const SLOTS_PER_PAGE: usize = COLUMNS as usize * ROWS as usize;

/// Check whether a footprint anchored at `position` lies inside the page.
///
/// Pure bounds check, independent of any placed items.
pub fn fits_at(position: GridPosition, footprint: Footprint) -> bool {
    CellRect::new(position, footprint).in_bounds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_per_page() {
        assert_eq!(SLOTS_PER_PAGE, 24);
        assert_eq!(GridPosition::all().count(), SLOTS_PER_PAGE);
    }

    #[test]
    fn test_fits_at_edges() {
        let widget = Footprint::WIDGET;
        assert!(fits_at(GridPosition::new(0, 0), widget));
        assert!(fits_at(GridPosition::new(4, 2), widget));
        assert!(!fits_at(GridPosition::new(5, 3), widget));
        assert!(!fits_at(GridPosition::new(0, 3), widget));
        assert!(!fits_at(GridPosition::new(5, 0), widget));
    }

    #[test]
    fn test_fits_at_unit() {
        assert!(fits_at(GridPosition::new(5, 3), Footprint::UNIT));
        assert!(!fits_at(GridPosition::new(6, 0), Footprint::UNIT));
        assert!(!fits_at(GridPosition::new(0, 4), Footprint::UNIT));
    }

    #[test]
    fn test_fits_at_full_page() {
        let full = Footprint::new(COLUMNS, ROWS).unwrap();
        assert!(fits_at(GridPosition::new(0, 0), full));
        assert!(!fits_at(GridPosition::new(0, 1), full));
    }
}
