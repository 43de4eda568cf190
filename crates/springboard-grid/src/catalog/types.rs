use serde::{Deserialize, Serialize};

use crate::grid::Footprint;
use crate::types::{ItemId, PageIndex};

/// An app known to the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    /// Catalog ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Pinned to the dock instead of the grid
    #[serde(default)]
    pub dock: bool,
    /// External link opened instead of the app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Notification badge count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    /// Whether tapping the icon opens a working app
    #[serde(default)]
    pub has_implementation: bool,
}

impl AppEntry {
    /// Create a grid app entry
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dock: false,
            url: None,
            badge: None,
            has_implementation: false,
        }
    }

    /// Create a dock app entry
    pub fn dock(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dock: true,
            ..Self::new(id, name)
        }
    }

    /// What tapping this app's icon does
    ///
    /// A link wins over an implementation.
    pub fn launch(&self) -> Launch {
        match (&self.url, self.has_implementation) {
            (Some(url), _) => Launch::External { url: url.clone() },
            (None, true) => Launch::Open {
                app_id: self.id.clone(),
            },
            (None, false) => Launch::Unavailable,
        }
    }

    /// Case-insensitive match against name or ID
    ///
    /// `query` must already be lowercase.
    pub(crate) fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.id.to_lowercase().contains(query)
    }
}

/// Result of tapping an app icon
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Launch {
    /// Open the link in a new browser tab
    External { url: String },
    /// Open the app full screen
    Open { app_id: String },
    /// Placeholder icon, nothing happens
    Unavailable,
}

/// Widget content type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Weather,
    Calendar,
    Clock,
    Custom,
}

/// Widget size class, used by the renderer only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A widget known to the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEntry {
    /// Catalog ID
    pub id: String,
    /// Content type
    pub kind: WidgetKind,
    /// Size class
    #[serde(default)]
    pub size: WidgetSize,
    /// Cells covered on the grid, 2×2 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint: Option<Footprint>,
}

impl WidgetEntry {
    /// Create a widget entry with the default footprint
    pub fn new(id: impl Into<String>, kind: WidgetKind, size: WidgetSize) -> Self {
        Self {
            id: id.into(),
            kind,
            size,
            footprint: None,
        }
    }

    /// Cells covered on the grid
    ///
    /// The size class never changes occupancy; only an explicit footprint does.
    pub fn footprint(&self) -> Footprint {
        self.footprint.unwrap_or_default()
    }
}

/// Which catalog entry a placement puts on the grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reference {
    /// An app by catalog ID
    App(String),
    /// A widget by catalog ID
    Widget(String),
}

impl Reference {
    /// Catalog ID being referenced
    pub fn id(&self) -> &str {
        match self {
            Reference::App(id) | Reference::Widget(id) => id,
        }
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reference::App(id) => write!(f, "app:{}", id),
            Reference::Widget(id) => write!(f, "widget:{}", id),
        }
    }
}

/// Where a placement should land when the layout is seeded
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum PlacementRule {
    /// First free slot, scanning pages in order
    #[default]
    FirstAvailable,
    /// Explicit page and anchor cell
    At { page: PageIndex, row: u8, col: u8 },
}

/// One item to put on the grid at startup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Grid item ID; derived from the reference when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    /// Catalog entry to place
    pub reference: Reference,
    /// Where to place it
    #[serde(default)]
    pub rule: PlacementRule,
}

impl Placement {
    /// Place an app at an explicit cell
    pub fn app_at(app_id: impl Into<String>, page: PageIndex, row: u8, col: u8) -> Self {
        Self {
            item_id: None,
            reference: Reference::App(app_id.into()),
            rule: PlacementRule::At { page, row, col },
        }
    }

    /// Place a widget at an explicit cell
    pub fn widget_at(widget_id: impl Into<String>, page: PageIndex, row: u8, col: u8) -> Self {
        Self {
            item_id: None,
            reference: Reference::Widget(widget_id.into()),
            rule: PlacementRule::At { page, row, col },
        }
    }

    /// Place an app in the first free slot
    pub fn app(app_id: impl Into<String>) -> Self {
        Self {
            item_id: None,
            reference: Reference::App(app_id.into()),
            rule: PlacementRule::FirstAvailable,
        }
    }

    /// Place a widget in the first free slot
    pub fn widget(widget_id: impl Into<String>) -> Self {
        Self {
            item_id: None,
            reference: Reference::Widget(widget_id.into()),
            rule: PlacementRule::FirstAvailable,
        }
    }

    /// Grid item ID: explicit, or `grid-app-<id>` / `grid-<id>`
    pub fn item_id(&self) -> ItemId {
        match (&self.item_id, &self.reference) {
            (Some(id), _) => id.clone(),
            (None, Reference::App(id)) => format!("grid-app-{}", id),
            (None, Reference::Widget(id)) => format!("grid-{}", id),
        }
    }
}
