use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::RejectReason;
use crate::grid::{fits_at, CellRect, Footprint, GridPosition, SLOTS_PER_PAGE};
use crate::item::GridItem;

/// One screen of the home grid
///
/// Item order carries no meaning. Mutations that could break the no-overlap
/// invariant go through [`Page::place`], which refuses them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Stable page identifier
    pub id: String,
    /// Items placed on this page
    items: Vec<GridItem>,
}

impl Page {
    /// Create an empty page
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }

    /// Items on this page
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID
    pub fn get(&self, item_id: &str) -> Option<&GridItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Check if page contains an item
    pub fn contains(&self, item_id: &str) -> bool {
        self.get(item_id).is_some()
    }

    /// Item covering `pos`, if any
    pub fn item_at(&self, pos: GridPosition) -> Option<&GridItem> {
        self.items.iter().find(|i| i.occupies(pos))
    }

    /// Check if any item other than `excluding` covers `pos`
    pub fn is_occupied(&self, pos: GridPosition, excluding: Option<&str>) -> bool {
        self.items
            .iter()
            .filter(|i| excluding != Some(i.id.as_str()))
            .any(|i| i.occupies(pos))
    }

    /// First item other than `excluding` that shares a cell with `rect`
    pub fn blocking(&self, rect: &CellRect, excluding: Option<&str>) -> Option<&GridItem> {
        self.items
            .iter()
            .filter(|i| excluding != Some(i.id.as_str()))
            .find(|i| i.rect().intersects(rect))
    }

    /// Check if `footprint` could be anchored at `pos` without leaving the
    /// page or covering another item
    pub fn can_place(&self, pos: GridPosition, footprint: Footprint, excluding: Option<&str>) -> bool {
        fits_at(pos, footprint)
            && self
                .blocking(&CellRect::new(pos, footprint), excluding)
                .is_none()
    }

    /// First free anchor for `footprint`, scanning rows top-to-bottom and
    /// columns left-to-right
    pub fn find_free_position(&self, footprint: Footprint) -> Option<GridPosition> {
        GridPosition::all().find(|&pos| self.can_place(pos, footprint, None))
    }

    /// All covered cells on this page
    pub fn occupied_cells(&self) -> BTreeSet<GridPosition> {
        self.items.iter().flat_map(|i| i.rect().cells()).collect()
    }

    /// Number of cells not covered by any item
    pub fn free_cell_count(&self) -> usize {
        SLOTS_PER_PAGE - self.occupied_cells().len()
    }

    /// Add an item after checking bounds and overlap
    pub fn place(&mut self, item: GridItem) -> Result<(), RejectReason> {
        if !item.rect().in_bounds() {
            return Err(RejectReason::OutOfBounds);
        }
        if let Some(blocking) = self.blocking(&item.rect(), Some(item.id.as_str())) {
            return Err(RejectReason::Overlap {
                blocking: blocking.id.clone(),
            });
        }
        self.items.retain(|i| i.id != item.id);
        self.items.push(item);
        Ok(())
    }

    /// Remove an item by ID
    pub(crate) fn remove(&mut self, item_id: &str) -> Option<GridItem> {
        let index = self.items.iter().position(|i| i.id == item_id)?;
        Some(self.items.remove(index))
    }

    /// Push an item the caller has already validated
    pub(crate) fn push_unchecked(&mut self, item: GridItem) {
        self.items.push(item);
    }
}
