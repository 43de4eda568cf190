//! Placed grid items
//!
//! An item is either an app or a widget. Apps always cover a single cell;
//! widgets carry their own footprint. Only the anchor is stored, the covered
//! cells are derived on demand.

mod kind;

pub use kind::ItemKind;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::grid::{CellRect, Footprint, GridPosition};
use crate::types::ItemId;

/// An app or widget placed on a page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    /// Unique across the whole layout, stable across moves
    pub id: ItemId,
    /// App or widget (with footprint)
    pub kind: ItemKind,
    /// Top-left cell
    pub anchor: GridPosition,
    /// Key into the external app/widget catalog
    pub reference_id: String,
}

impl GridItem {
    /// Create an app item
    pub fn app(id: impl Into<ItemId>, reference_id: impl Into<String>, anchor: GridPosition) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::App,
            anchor,
            reference_id: reference_id.into(),
        }
    }

    /// Create a widget item
    pub fn widget(
        id: impl Into<ItemId>,
        reference_id: impl Into<String>,
        anchor: GridPosition,
        footprint: Footprint,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Widget { footprint },
            anchor,
            reference_id: reference_id.into(),
        }
    }

    /// Cells covered, in width × height
    pub fn footprint(&self) -> Footprint {
        self.kind.footprint()
    }

    /// The block of cells this item covers
    pub fn rect(&self) -> CellRect {
        CellRect::new(self.anchor, self.footprint())
    }

    /// Check if this item covers `pos`
    pub fn occupies(&self, pos: GridPosition) -> bool {
        self.rect().contains(pos)
    }

    /// Check if this item shares any cell with `other`
    pub fn overlaps(&self, other: &GridItem) -> bool {
        self.rect().intersects(&other.rect())
    }

    /// Copy of this item re-anchored at `anchor`
    pub fn with_anchor(&self, anchor: GridPosition) -> Self {
        Self {
            anchor,
            ..self.clone()
        }
    }
}

/// Every cell covered by an item
pub fn cells_occupied_by(item: &GridItem) -> BTreeSet<GridPosition> {
    item.rect().cell_set()
}

/// Check if two items share any cell
pub fn overlap(a: &GridItem, b: &GridItem) -> bool {
    a.overlaps(b)
}
