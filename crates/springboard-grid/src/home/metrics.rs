use serde::{Deserialize, Serialize};

use crate::grid::{GridPosition, COLUMNS, ROWS};
use crate::item::GridItem;
use crate::math::{pixel_to_grid, Size, Vec2};

/// Horizontal padding on each side of the grid
const HORIZONTAL_PADDING: f32 = 20.0;
/// Extra height per cell for the icon label
const LABEL_HEIGHT: f32 = 14.0;
/// Gap trimmed from widget width
const WIDGET_GAP: f32 = 10.0;
/// Space below a widget for its label
const WIDGET_LABEL_HEIGHT: f32 = 20.0;

/// Pixel geometry of one page
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    /// Size of one cell
    pub cell: Size,
    /// Pixel position of cell (0, 0)
    pub origin: Vec2,
}

impl CellMetrics {
    /// Create metrics from explicit cell size and origin
    pub const fn new(cell: Size, origin: Vec2) -> Self {
        Self { cell, origin }
    }

    /// Metrics for a page `grid_width` pixels wide
    ///
    /// Cells are square plus room for the label underneath.
    pub fn for_grid_width(grid_width: f32) -> Self {
        let available = (grid_width - HORIZONTAL_PADDING * 2.0).max(0.0);
        let cell_width = available / f32::from(COLUMNS);
        Self {
            cell: Size::new(cell_width, cell_width + LABEL_HEIGHT),
            origin: Vec2::new(HORIZONTAL_PADDING, 0.0),
        }
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, pos: GridPosition) -> Vec2 {
        Vec2::new(
            self.origin.x + f32::from(pos.col) * self.cell.width,
            self.origin.y + f32::from(pos.row) * self.cell.height,
        )
    }

    /// Top-left pixel of an item
    pub fn item_origin(&self, item: &GridItem) -> Vec2 {
        self.cell_origin(item.anchor)
    }

    /// Rendered size of an item
    pub fn item_size(&self, item: &GridItem) -> Size {
        if item.kind.is_app() {
            return self.cell;
        }
        let footprint = item.footprint();
        let width = f32::from(footprint.width()) * self.cell.width - WIDGET_GAP;
        let height = f32::from(footprint.height()) * self.cell.width - WIDGET_GAP;
        Size::new(width, height + WIDGET_LABEL_HEIGHT)
    }

    /// Nearest cell to a pixel position, clamped onto the page
    pub fn to_grid(&self, point: Vec2) -> GridPosition {
        pixel_to_grid(
            point.x,
            point.y,
            self.cell.width,
            self.cell.height,
            self.origin.x,
            self.origin.y,
        )
    }

    /// Total pixel height of the grid
    pub fn grid_height(&self) -> f32 {
        f32::from(ROWS) * self.cell.height
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::for_grid_width(360.0)
    }
}
