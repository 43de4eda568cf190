//! Home Screen Grid Engine
//!
//! This crate provides the state behind a phone-style home screen:
//! - Fixed 4×6 page grid with apps (1×1) and widgets (multi-cell)
//! - Placement search, occupancy and overlap queries
//! - Validated, all-or-nothing item moves across pages
//! - Pixel to grid cell conversion for drag-and-drop
//! - Seeding the initial layout from an app/widget catalog
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`grid`]: Grid constants and cell geometry (`GridPosition`, `Footprint`, `CellRect`)
//! - [`item`]: Placed items (`GridItem`, `ItemKind`)
//! - [`layout`]: Pages, the multi-page layout and the move transaction
//! - [`math`]: Pixel-space types and the pixel → cell conversion
//! - [`catalog`]: Catalog configuration and initial layout seeding
//! - [`home`]: Presentation-facing state container (navigation, drag, layout)
//!
//! ## Example
//!
//! ```rust
//! use springboard_grid::{Footprint, GridItem, GridPosition, Page, PageLayout};
//!
//! let mut page = Page::new("page-1");
//! let anchor = page.find_free_position(Footprint::UNIT).unwrap();
//! assert_eq!(anchor, GridPosition::new(0, 0));
//! page.place(GridItem::app("grid-app-notes", "notes", anchor)).unwrap();
//!
//! let layout = PageLayout::from_pages(vec![page, Page::new("page-2")]).unwrap();
//! let outcome = layout
//!     .move_item("grid-app-notes", 0, 1, GridPosition::new(2, 1))
//!     .unwrap();
//! assert!(outcome.is_moved());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Moves never mutate the input layout; callers commit results
//! 2. **Tagged Items**: Apps carry no footprint, widgets always carry one
//! 3. **Two Failure Tiers**: Rejected moves are values, contract violations are errors
//! 4. **Minimal Dependencies**: Browser bindings live behind the `wasm` feature

pub mod catalog;
pub mod grid;
pub mod home;
pub mod item;
pub mod layout;
pub mod math;

mod error;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use catalog::{
    AppEntry, Catalog, Launch, Placement, PlacementRule, Reference, WidgetEntry, WidgetKind,
    WidgetSize, MAX_PAGES,
};
pub use grid::{fits_at, CellRect, Footprint, GridPosition, COLUMNS, ROWS, SLOTS_PER_PAGE};
pub use home::{CellMetrics, DragState, HomeScreen, Navigation, Overlay, ScreenMode, Swipe};
pub use item::{cells_occupied_by, overlap, GridItem, ItemKind};
pub use layout::{MoveOutcome, Page, PageLayout, RejectReason};
pub use math::{pixel_to_grid, Size, Vec2};

pub use error::{GridError, GridResult};
pub use types::{ItemId, PageIndex};
