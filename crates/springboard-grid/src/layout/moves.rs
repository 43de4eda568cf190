use serde::Serialize;

use super::PageLayout;
use crate::types::ItemId;

/// Why a move left the layout unchanged
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum RejectReason {
    /// The item is not on the stated source page
    ItemNotFound,
    /// The item's footprint would leave the page
    OutOfBounds,
    /// Another item already covers part of the target
    Overlap {
        /// First item found in the way
        blocking: ItemId,
    },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound => write!(f, "item not on source page"),
            Self::OutOfBounds => write!(f, "target out of bounds"),
            Self::Overlap { blocking } => write!(f, "target overlaps '{}'", blocking),
        }
    }
}

/// Result of a move request
///
/// Both variants carry a complete layout. A rejected move hands back a
/// layout equal to the one the move was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied
    Moved(PageLayout),
    /// The move was refused
    Rejected {
        /// Unchanged layout
        layout: PageLayout,
        /// Why the move was refused
        reason: RejectReason,
    },
}

impl MoveOutcome {
    /// Check if the move was applied
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    /// The resulting layout, whether moved or not
    pub fn layout(&self) -> &PageLayout {
        match self {
            MoveOutcome::Moved(layout) => layout,
            MoveOutcome::Rejected { layout, .. } => layout,
        }
    }

    /// Take the resulting layout
    pub fn into_layout(self) -> PageLayout {
        match self {
            MoveOutcome::Moved(layout) => layout,
            MoveOutcome::Rejected { layout, .. } => layout,
        }
    }

    /// Rejection reason, `None` if the move was applied
    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            MoveOutcome::Moved(_) => None,
            MoveOutcome::Rejected { reason, .. } => Some(reason),
        }
    }
}
