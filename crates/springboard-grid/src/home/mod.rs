//! Home screen state for the presentation layer
//!
//! The presentation layer owns one [`HomeScreen`]. Navigation state (lock,
//! open app, overlays, current page, edit mode) and the grid layout live
//! side by side but are updated independently: nothing in [`Navigation`]
//! can change where an item sits, and the layout only changes through
//! [`crate::PageLayout::move_item`].
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  HomeScreen                  │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────┐  │
//! │  │ Navigation │ │ PageLayout │ │ Metrics  │  │
//! │  │  (modes)   │ │  (grid)    │ │ (pixels) │  │
//! │  └────────────┘ └────────────┘ └──────────┘  │
//! │  ┌────────────┐                              │
//! │  │ DragState  │  drag start → drop → move    │
//! │  └────────────┘                              │
//! └──────────────────────────────────────────────┘
//! ```

mod drag;
mod metrics;
mod navigation;
mod screen;

pub use drag::DragState;
pub use metrics::CellMetrics;
pub use navigation::{Navigation, Overlay, ScreenMode, Swipe};
pub use screen::HomeScreen;
