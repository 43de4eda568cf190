use serde::{Deserialize, Serialize};

use super::CellMetrics;
use crate::grid::GridPosition;
use crate::item::GridItem;
use crate::math::Vec2;
use crate::types::{ItemId, PageIndex};

/// An item being dragged in edit mode
///
/// Captured when the drag starts; the drop target is computed from the
/// item's starting pixel position plus the pointer offset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    /// Item being dragged
    pub item_id: ItemId,
    /// Page the item started on
    pub page: PageIndex,
    /// Anchor at drag start
    pub anchor: GridPosition,
    /// Pixel position of the item at drag start
    pub start: Vec2,
}

impl DragState {
    /// Start dragging `item` from `page`
    pub fn begin(item: &GridItem, page: PageIndex, metrics: &CellMetrics) -> Self {
        Self {
            item_id: item.id.clone(),
            page,
            anchor: item.anchor,
            start: metrics.item_origin(item),
        }
    }

    /// Pixel position of the item after moving the pointer by `offset`
    pub fn drop_point(&self, offset: Vec2) -> Vec2 {
        self.start + offset
    }

    /// Cell under the dropped item
    pub fn drop_target(&self, offset: Vec2, metrics: &CellMetrics) -> GridPosition {
        metrics.to_grid(self.drop_point(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_target() {
        let metrics = CellMetrics::for_grid_width(360.0);
        let item = GridItem::app("a", "notes", GridPosition::new(2, 1));
        let drag = DragState::begin(&item, 0, &metrics);
        assert_eq!(drag.start, Vec2::new(100.0, 188.0));

        // less than half a cell snaps back
        assert_eq!(drag.drop_target(Vec2::new(30.0, -40.0), &metrics), item.anchor);
        // a cell and a bit right, two cells up
        assert_eq!(
            drag.drop_target(Vec2::new(95.0, -188.0), &metrics),
            GridPosition::new(0, 2)
        );
        // far off the bottom-right clamps to the corner
        assert_eq!(
            drag.drop_target(Vec2::new(4000.0, 4000.0), &metrics),
            GridPosition::new(5, 3)
        );
    }
}
