use serde::{Deserialize, Serialize};

use crate::grid::Footprint;

/// What an item is; only widgets have a configurable footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    /// Single-cell app icon
    App,
    /// Multi-cell widget
    Widget {
        /// Cells covered from the anchor
        footprint: Footprint,
    },
}

impl ItemKind {
    /// Cells covered by an item of this kind
    pub fn footprint(&self) -> Footprint {
        match self {
            ItemKind::App => Footprint::UNIT,
            ItemKind::Widget { footprint } => *footprint,
        }
    }

    /// Check if this is an app
    pub fn is_app(&self) -> bool {
        matches!(self, ItemKind::App)
    }

    /// Check if this is a widget
    pub fn is_widget(&self) -> bool {
        matches!(self, ItemKind::Widget { .. })
    }

    /// Get the string ID for this kind
    pub fn id(&self) -> &'static str {
        match self {
            ItemKind::App => "app",
            ItemKind::Widget { .. } => "widget",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::App => write!(f, "{}", self.id()),
            ItemKind::Widget { footprint } => write!(f, "{} {}", self.id(), footprint),
        }
    }
}
