//! Browser bindings for the home screen engine
//!
//! Layout and navigation cross the boundary as JSON strings. Grid errors
//! become JS exceptions carrying the error message; rejected moves are a
//! plain `false`.

use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::error::{GridError, GridResult};
use crate::grid::GridPosition;
use crate::home::{HomeScreen, Swipe};
use crate::math::{pixel_to_grid, Vec2};

fn to_js(err: GridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> GridResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Home screen engine handle owned by the page script
#[wasm_bindgen]
pub struct SpringboardEngine {
    home: HomeScreen,
}

#[wasm_bindgen]
impl SpringboardEngine {
    /// Create an engine seeded from the stock catalog
    #[wasm_bindgen(constructor)]
    pub fn new(grid_width: f32) -> Result<SpringboardEngine, JsValue> {
        let home = HomeScreen::from_catalog(&Catalog::builtin(), grid_width).map_err(to_js)?;
        Ok(Self { home })
    }

    /// Create an engine seeded from a catalog JSON document
    #[wasm_bindgen]
    pub fn from_catalog_json(json: &str, grid_width: f32) -> Result<SpringboardEngine, JsValue> {
        let catalog = Catalog::from_json(json).map_err(to_js)?;
        let home = HomeScreen::from_catalog(&catalog, grid_width).map_err(to_js)?;
        Ok(Self { home })
    }

    /// Current layout as JSON
    #[wasm_bindgen]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        to_json(self.home.layout()).map_err(to_js)
    }

    /// Navigation state as JSON
    #[wasm_bindgen]
    pub fn navigation_json(&self) -> Result<String, JsValue> {
        to_json(self.home.navigation()).map_err(to_js)
    }

    /// Move an item; returns whether the layout changed
    #[wasm_bindgen]
    pub fn move_item(
        &mut self,
        item_id: &str,
        from_page: usize,
        to_page: usize,
        row: u8,
        col: u8,
    ) -> Result<bool, JsValue> {
        self.home
            .move_item(item_id, from_page, to_page, GridPosition::new(row, col))
            .map_err(to_js)
    }

    /// Nearest cell to a pixel position, as `{"row":..,"col":..}`
    #[wasm_bindgen]
    pub fn pixel_to_grid(&self, x: f32, y: f32) -> Result<String, JsValue> {
        let metrics = self.home.metrics();
        let pos = pixel_to_grid(
            x,
            y,
            metrics.cell.width,
            metrics.cell.height,
            metrics.origin.x,
            metrics.origin.y,
        );
        to_json(&pos).map_err(to_js)
    }

    /// Start dragging an item on the current page
    #[wasm_bindgen]
    pub fn begin_drag(&mut self, item_id: &str) -> bool {
        self.home.begin_drag(item_id)
    }

    /// Drop the dragged item after the pointer moved by (dx, dy)
    #[wasm_bindgen]
    pub fn end_drag(&mut self, dx: f32, dy: f32) -> Result<bool, JsValue> {
        self.home.end_drag(Vec2::new(dx, dy)).map_err(to_js)
    }

    /// Abandon the current drag
    #[wasm_bindgen]
    pub fn cancel_drag(&mut self) {
        self.home.cancel_drag();
    }

    /// Enter or leave edit mode; returns the resulting state
    #[wasm_bindgen]
    pub fn set_edit_mode(&mut self, enabled: bool) -> bool {
        let nav = self.home.navigation_mut();
        if enabled {
            nav.enter_edit_mode()
        } else {
            nav.exit_edit_mode();
            self.home.cancel_drag();
            false
        }
    }

    /// Jump to a page; returns the page actually shown
    #[wasm_bindgen]
    pub fn set_page(&mut self, index: usize) -> usize {
        self.home.set_page(index)
    }

    /// Page shown on the springboard
    #[wasm_bindgen]
    pub fn current_page(&self) -> usize {
        self.home.navigation().current_page()
    }

    /// Number of pages in the layout
    #[wasm_bindgen]
    pub fn page_count(&self) -> usize {
        self.home.layout().page_count()
    }

    /// Apply a finished horizontal swipe; returns the page shown, or -1
    /// when the today view opened instead
    #[wasm_bindgen]
    pub fn swipe(&mut self, offset: f32, velocity: f32, page_width: f32) -> i32 {
        match self.home.swipe(offset, velocity, page_width) {
            Swipe::Page(page) => page as i32,
            Swipe::TodayView => -1,
            Swipe::Ignored => self.home.navigation().current_page() as i32,
        }
    }

    /// Track an in-progress drag; returns whether spotlight is showing
    #[wasm_bindgen]
    pub fn drag_vertical(&mut self, dx: f32, dy: f32) -> bool {
        self.home.drag_vertical(dx, dy)
    }

    /// Spotlight results as a JSON array of apps
    #[wasm_bindgen]
    pub fn search_json(&self, query: &str) -> Result<String, JsValue> {
        let hits: Vec<_> = self.home.search(query).collect();
        to_json(&hits).map_err(to_js)
    }

    /// Tap an app icon; returns the launch action as JSON
    #[wasm_bindgen]
    pub fn tap_app(&mut self, app_id: &str) -> Result<String, JsValue> {
        let launch = self.home.tap_app(app_id);
        to_json(&launch).map_err(to_js)
    }

    /// Recompute cell geometry after a resize
    #[wasm_bindgen]
    pub fn set_grid_width(&mut self, grid_width: f32) {
        self.home.set_grid_width(grid_width);
    }

    /// Leave the lock screen
    #[wasm_bindgen]
    pub fn unlock(&mut self) {
        self.home.navigation_mut().unlock();
    }

    /// Return to the lock screen
    #[wasm_bindgen]
    pub fn lock(&mut self) {
        self.home.cancel_drag();
        self.home.navigation_mut().lock();
    }
}
