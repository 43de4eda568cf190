use crate::grid::{GridPosition, COLUMNS, ROWS};

/// Convert a pixel coordinate to the nearest grid cell
///
/// `col = round((x - offset_x) / cell_width)` and
/// `row = round((y - offset_y) / cell_height)`, each clamped onto the page.
/// Never fails: points past any edge snap to the edge cell, and NaN lands on
/// row or column 0. Whether the item may actually go there is decided by
/// the move, not here.
pub fn pixel_to_grid(
    x: f32,
    y: f32,
    cell_width: f32,
    cell_height: f32,
    offset_x: f32,
    offset_y: f32,
) -> GridPosition {
    let col = snap((x - offset_x) / cell_width, COLUMNS);
    let row = snap((y - offset_y) / cell_height, ROWS);
    GridPosition::new(row, col)
}

fn snap(cells: f32, count: u8) -> u8 {
    // float → int casts saturate, NaN becomes 0
    let index = cells.round() as i32;
    index.clamp(0, i32::from(count) - 1) as u8
}
