use tracing::{debug, trace};

use super::{CellMetrics, DragState, Navigation, Swipe};
use crate::catalog::{AppEntry, Catalog, Launch};
use crate::error::GridResult;
use crate::grid::GridPosition;
use crate::layout::{MoveOutcome, PageLayout};
use crate::math::Vec2;
use crate::types::PageIndex;

/// Explicit state container behind the home screen UI
///
/// Owns the committed layout. Moves are computed by the pure
/// [`PageLayout::move_item`] and only committed here when accepted.
#[derive(Clone, Debug)]
pub struct HomeScreen {
    catalog: Catalog,
    layout: PageLayout,
    nav: Navigation,
    metrics: CellMetrics,
    drag: Option<DragState>,
}

impl HomeScreen {
    /// Create from an existing layout with an empty catalog
    pub fn new(layout: PageLayout, metrics: CellMetrics) -> Self {
        Self {
            catalog: Catalog::default(),
            layout,
            nav: Navigation::new(),
            metrics,
            drag: None,
        }
    }

    /// Seed the layout from a catalog
    pub fn from_catalog(catalog: &Catalog, grid_width: f32) -> GridResult<Self> {
        let mut home = Self::new(
            catalog.seed()?,
            CellMetrics::for_grid_width(grid_width),
        );
        home.catalog = catalog.clone();
        Ok(home)
    }

    /// Catalog the layout was seeded from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current layout
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Navigation state
    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    /// Navigation state, mutably
    pub fn navigation_mut(&mut self) -> &mut Navigation {
        &mut self.nav
    }

    /// Pixel geometry used for drags
    pub fn metrics(&self) -> &CellMetrics {
        &self.metrics
    }

    /// Recompute pixel geometry after the viewport is resized
    pub fn set_grid_width(&mut self, grid_width: f32) {
        self.metrics = CellMetrics::for_grid_width(grid_width);
    }

    /// Item currently being dragged
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Jump to a page, clamped to the layout
    pub fn set_page(&mut self, index: PageIndex) -> PageIndex {
        self.nav.set_page(index, self.layout.page_count())
    }

    /// Apply a horizontal swipe on the springboard
    pub fn swipe(&mut self, offset: f32, velocity: f32, page_width: f32) -> Swipe {
        let page_count = self.layout.page_count();
        self.nav.swipe(offset, velocity, page_width, page_count)
    }

    /// Track an in-progress drag that may pull down spotlight
    pub fn drag_vertical(&mut self, dx: f32, dy: f32) -> bool {
        self.nav.drag_vertical(dx, dy)
    }

    /// Spotlight results for `query`
    pub fn search(&self, query: &str) -> impl Iterator<Item = &AppEntry> + '_ {
        self.catalog.search(query)
    }

    /// Tap an app icon
    ///
    /// Implemented apps open full screen; links are handed back for the
    /// presentation layer to open. Taps do nothing in edit mode or for
    /// apps missing from the catalog, and on the lock screen.
    pub fn tap_app(&mut self, app_id: &str) -> Launch {
        if self.nav.is_edit_mode() || self.nav.is_locked() {
            return Launch::Unavailable;
        }
        let Some(app) = self.catalog.app(app_id) else {
            return Launch::Unavailable;
        };
        let launch = app.launch();
        if let Launch::Open { app_id } = &launch {
            self.nav.open_app(app_id.as_str());
        }
        trace!(app = app_id, ?launch, "app tapped");
        launch
    }

    /// Move an item and commit the result if accepted
    ///
    /// Returns whether the layout changed. Bad page indices are errors.
    pub fn move_item(
        &mut self,
        item_id: &str,
        from_page: PageIndex,
        to_page: PageIndex,
        new_position: GridPosition,
    ) -> GridResult<bool> {
        match self.layout.move_item(item_id, from_page, to_page, new_position)? {
            MoveOutcome::Moved(layout) => {
                self.layout = layout;
                Ok(true)
            }
            MoveOutcome::Rejected { .. } => Ok(false),
        }
    }

    /// Start dragging an item on the current page
    ///
    /// Only possible in edit mode. Returns false if the item is not on the
    /// page being shown.
    pub fn begin_drag(&mut self, item_id: &str) -> bool {
        if !self.nav.is_edit_mode() {
            return false;
        }
        let page = self.nav.current_page();
        let Some(item) = self.layout.page(page).ok().and_then(|p| p.get(item_id)) else {
            return false;
        };
        trace!(item = item_id, page, "drag started");
        self.drag = Some(DragState::begin(item, page, &self.metrics));
        true
    }

    /// Drop the dragged item after the pointer moved by `offset`
    ///
    /// The drop point is snapped to the nearest cell on the same page.
    /// Dropping onto the starting cell does nothing. Returns whether the
    /// layout changed.
    pub fn end_drag(&mut self, offset: Vec2) -> GridResult<bool> {
        let Some(drag) = self.drag.take() else {
            return Ok(false);
        };
        if !self.nav.is_edit_mode() {
            return Ok(false);
        }

        let target = drag.drop_target(offset, &self.metrics);
        if target == drag.anchor {
            return Ok(false);
        }

        let moved = self.move_item(&drag.item_id, drag.page, drag.page, target)?;
        debug!(item = %drag.item_id, row = target.row, col = target.col, moved, "drag ended");
        Ok(moved)
    }

    /// Abandon the current drag
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }
}
