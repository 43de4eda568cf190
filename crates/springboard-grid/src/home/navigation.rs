use serde::{Deserialize, Serialize};

/// Fraction of the page width a horizontal drag must travel to change page
const SWIPE_DISTANCE_FRACTION: f32 = 0.2;
/// Horizontal velocity (px/s) that changes page regardless of distance
const SWIPE_VELOCITY: f32 = 500.0;
/// Upward drag (px) that pulls down spotlight search
const SPOTLIGHT_PULL: f32 = 60.0;
/// How much more vertical than horizontal a spotlight drag must be
const SPOTLIGHT_VERTICAL_RATIO: f32 = 1.5;

/// What fills the screen
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ScreenMode {
    /// Lock screen
    #[default]
    Locked,
    /// Springboard grid
    Home,
    /// An app is open on top of the springboard
    App {
        /// Catalog ID of the open app
        app_id: String,
    },
}

/// Panels drawn over the home screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Overlay {
    Spotlight,
    ControlCenter,
    TodayView,
}

/// Result of a horizontal swipe on the springboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Now showing this page (possibly unchanged)
    Page(usize),
    /// Swiped right past the first page
    TodayView,
    /// Paging is disabled in the current mode
    Ignored,
}

/// Navigation and overlay state
///
/// Independent of the grid layout: nothing here moves items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    mode: ScreenMode,
    overlay: Option<Overlay>,
    current_page: usize,
    edit_mode: bool,
}

impl Navigation {
    /// Start on the lock screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Current screen mode
    pub fn mode(&self) -> &ScreenMode {
        &self.mode
    }

    /// Open overlay, if any
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Page shown on the springboard
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Check if items can be dragged
    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Check if the lock screen is showing
    pub fn is_locked(&self) -> bool {
        self.mode == ScreenMode::Locked
    }

    /// Leave the lock screen for the springboard
    pub fn unlock(&mut self) {
        if self.is_locked() {
            self.mode = ScreenMode::Home;
        }
    }

    /// Return to the lock screen and reset everything else
    pub fn lock(&mut self) {
        *self = Self::default();
    }

    /// Open an app, closing overlays and leaving edit mode
    ///
    /// Returns false on the lock screen.
    pub fn open_app(&mut self, app_id: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        self.mode = ScreenMode::App {
            app_id: app_id.into(),
        };
        self.overlay = None;
        self.edit_mode = false;
        true
    }

    /// Close the open app
    pub fn close_app(&mut self) {
        if matches!(self.mode, ScreenMode::App { .. }) {
            self.mode = ScreenMode::Home;
        }
    }

    /// Show an overlay, replacing any other
    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    /// Hide the current overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Show `overlay` if hidden, hide it if showing
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.overlay == Some(overlay) {
            self.overlay = None;
        } else {
            self.overlay = Some(overlay);
        }
    }

    /// Jump to a page, clamped to `page_count`
    pub fn set_page(&mut self, index: usize, page_count: usize) -> usize {
        self.current_page = index.min(page_count.saturating_sub(1));
        self.current_page
    }

    /// Enter edit mode; only possible on the springboard
    pub fn enter_edit_mode(&mut self) -> bool {
        if self.mode != ScreenMode::Home {
            return false;
        }
        self.edit_mode = true;
        true
    }

    /// Leave edit mode
    pub fn exit_edit_mode(&mut self) {
        self.edit_mode = false;
    }

    /// Apply a horizontal swipe that ended with `offset` px and `velocity` px/s
    ///
    /// Negative values swipe left (next page). Swiping right on the first
    /// page opens the today view.
    pub fn swipe(&mut self, offset: f32, velocity: f32, page_width: f32, page_count: usize) -> Swipe {
        if self.edit_mode || self.mode != ScreenMode::Home {
            return Swipe::Ignored;
        }

        let threshold = page_width * SWIPE_DISTANCE_FRACTION;
        let last = page_count.saturating_sub(1);
        // stored page may be stale after a layout change or deserialization
        self.current_page = self.current_page.min(last);

        if offset < -threshold || velocity < -SWIPE_VELOCITY {
            self.current_page = self.current_page.saturating_add(1).min(last);
        } else if offset > threshold || velocity > SWIPE_VELOCITY {
            if self.current_page == 0 {
                self.overlay = Some(Overlay::TodayView);
                return Swipe::TodayView;
            }
            self.current_page -= 1;
        }

        Swipe::Page(self.current_page)
    }

    /// Open spotlight if a drag so far is mostly upward and long enough
    ///
    /// Called while the drag is in progress. Returns whether spotlight is
    /// now showing.
    pub fn drag_vertical(&mut self, dx: f32, dy: f32) -> bool {
        if self.edit_mode || self.mode != ScreenMode::Home {
            return false;
        }
        if dy < -SPOTLIGHT_PULL && dy.abs() > dx.abs() * SPOTLIGHT_VERTICAL_RATIO {
            self.overlay = Some(Overlay::Spotlight);
        }
        self.overlay == Some(Overlay::Spotlight)
    }
}
