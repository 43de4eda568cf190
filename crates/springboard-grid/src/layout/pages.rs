use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{MoveOutcome, Page, RejectReason};
use crate::error::{GridError, GridResult};
use crate::grid::{Footprint, GridPosition};
use crate::item::GridItem;
use crate::types::PageIndex;

/// Ordered sequence of home screen pages
///
/// Deserializing a layout runs the same validation as
/// [`PageLayout::from_pages`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct PageLayout {
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct RawLayout {
    pages: Vec<Page>,
}

impl TryFrom<RawLayout> for PageLayout {
    type Error = GridError;

    fn try_from(raw: RawLayout) -> GridResult<Self> {
        PageLayout::from_pages(raw.pages)
    }
}

impl PageLayout {
    /// Create a layout with no pages
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Create a layout of `count` empty pages named `page-1`, `page-2`, ...
    pub fn with_page_count(count: usize) -> Self {
        let mut layout = Self::new();
        for _ in 0..count {
            layout.push_page();
        }
        layout
    }

    /// Create a layout from pages, validating every invariant
    pub fn from_pages(pages: Vec<Page>) -> GridResult<Self> {
        let layout = Self { pages };
        layout.validate()?;
        Ok(layout)
    }

    /// All pages in order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of items across all pages
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Get a page by index
    pub fn page(&self, index: PageIndex) -> GridResult<&Page> {
        self.pages.get(index).ok_or(GridError::PageIndexOutOfBounds {
            index,
            count: self.pages.len(),
        })
    }

    pub(crate) fn page_mut(&mut self, index: PageIndex) -> GridResult<&mut Page> {
        let count = self.pages.len();
        self.pages
            .get_mut(index)
            .ok_or(GridError::PageIndexOutOfBounds { index, count })
    }

    /// Append an empty page and return its index
    pub fn push_page(&mut self) -> PageIndex {
        let index = self.pages.len();
        self.pages.push(Page::new(format!("page-{}", index + 1)));
        index
    }

    /// Find an item anywhere in the layout
    pub fn locate(&self, item_id: &str) -> Option<(PageIndex, &GridItem)> {
        self.pages
            .iter()
            .enumerate()
            .find_map(|(index, page)| page.get(item_id).map(|item| (index, item)))
    }

    /// Get an item by ID from any page
    pub fn item(&self, item_id: &str) -> Option<&GridItem> {
        self.locate(item_id).map(|(_, item)| item)
    }

    /// Check if any item other than `excluding` covers `pos` on a page
    pub fn is_occupied(
        &self,
        page: PageIndex,
        pos: GridPosition,
        excluding: Option<&str>,
    ) -> GridResult<bool> {
        Ok(self.page(page)?.is_occupied(pos, excluding))
    }

    /// First free anchor for `footprint` on a page
    pub fn find_free_position(
        &self,
        page: PageIndex,
        footprint: Footprint,
    ) -> GridResult<Option<GridPosition>> {
        Ok(self.page(page)?.find_free_position(footprint))
    }

    /// First free anchor for `footprint` on any page, in page order
    pub fn find_free_slot(&self, footprint: Footprint) -> Option<(PageIndex, GridPosition)> {
        self.pages
            .iter()
            .enumerate()
            .find_map(|(index, page)| page.find_free_position(footprint).map(|pos| (index, pos)))
    }

    /// Re-check every layout invariant
    pub fn validate(&self) -> GridResult<()> {
        let mut seen = BTreeSet::new();
        for (index, page) in self.pages.iter().enumerate() {
            for (i, item) in page.items().iter().enumerate() {
                if !seen.insert(item.id.as_str()) {
                    return Err(GridError::DuplicateItem(item.id.clone()));
                }
                if !item.rect().in_bounds() {
                    return Err(GridError::invariant(format!(
                        "'{}' on page {} leaves the grid at {}",
                        item.id, index, item.anchor
                    )));
                }
                if let Some(other) = page.items()[i + 1..].iter().find(|o| o.overlaps(item)) {
                    return Err(GridError::invariant(format!(
                        "'{}' overlaps '{}' on page {}",
                        item.id, other.id, index
                    )));
                }
            }
        }
        Ok(())
    }

    /// Move an item to `new_position` on `to_page`
    ///
    /// Checks, in order: the item is on `from_page`; its footprint fits at
    /// `new_position`; no other item on `to_page` covers any target cell.
    /// The first failed check rejects the whole move. `self` is never
    /// modified: an accepted move returns a new layout, a rejected one
    /// returns a copy of this one.
    ///
    /// Page indices outside the layout are a caller bug and return an error.
    pub fn move_item(
        &self,
        item_id: &str,
        from_page: PageIndex,
        to_page: PageIndex,
        new_position: GridPosition,
    ) -> GridResult<MoveOutcome> {
        let origin = self.page(from_page)?;
        let target = self.page(to_page)?;

        let Some(item) = origin.get(item_id) else {
            return Ok(self.reject(item_id, RejectReason::ItemNotFound));
        };

        let moved = item.with_anchor(new_position);
        if !moved.rect().in_bounds() {
            return Ok(self.reject(item_id, RejectReason::OutOfBounds));
        }

        if let Some(blocking) = target.blocking(&moved.rect(), Some(item_id)) {
            let reason = RejectReason::Overlap {
                blocking: blocking.id.clone(),
            };
            return Ok(self.reject(item_id, reason));
        }

        let kind = moved.kind.id();
        let mut pages = self.pages.clone();
        pages[from_page].remove(item_id);
        pages[to_page].push_unchecked(moved);

        debug!(
            item = item_id,
            kind,
            from_page,
            to_page,
            row = new_position.row,
            col = new_position.col,
            "moved grid item"
        );
        Ok(MoveOutcome::Moved(PageLayout { pages }))
    }

    fn reject(&self, item_id: &str, reason: RejectReason) -> MoveOutcome {
        trace!(item = item_id, %reason, "move rejected");
        MoveOutcome::Rejected {
            layout: self.clone(),
            reason,
        }
    }
}
