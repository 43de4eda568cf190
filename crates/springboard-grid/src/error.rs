//! Error types for the grid engine
//!
//! Only contract violations are errors. A move that is rejected because the
//! target is occupied or out of bounds is an ordinary outcome, see
//! [`crate::MoveOutcome`].

use crate::types::PageIndex;

/// Errors that indicate a caller bug in grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Page at the given index does not exist
    PageIndexOutOfBounds {
        /// The requested index
        index: PageIndex,
        /// The actual number of pages
        count: usize,
    },

    /// Footprint with a zero dimension
    InvalidFootprint {
        /// Requested width in cells
        width: u8,
        /// Requested height in cells
        height: u8,
    },

    /// Catalog placement refers to an app or widget that is not in the catalog
    UnknownReference(String),

    /// An item ID appears more than once in the layout
    DuplicateItem(String),

    /// Explicit placement does not fit inside the page bounds
    PlacementOutOfBounds {
        /// Item being placed
        item_id: String,
        /// Target page
        page: PageIndex,
        /// Target row
        row: u8,
        /// Target column
        col: u8,
    },

    /// Explicit placement overlaps an item placed earlier
    PlacementConflict {
        /// Item being placed
        item_id: String,
        /// Item already holding the cells
        blocking: String,
    },

    /// Footprint cannot fit even on an empty page, or every allowed page is full
    NoFreeSlot(String),

    /// Catalog asks for more pages than a home screen may have
    TooManyPages {
        /// Requested page count
        requested: usize,
        /// Allowed maximum
        max: usize,
    },

    /// A layout invariant does not hold
    InvariantViolation(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl GridError {
    /// Create a serialization error with message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create an invariant violation with message.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PageIndexOutOfBounds { index, count } => {
                write!(f, "page index {} out of bounds (count: {})", index, count)
            }
            Self::InvalidFootprint { width, height } => {
                write!(f, "invalid footprint {}x{}", width, height)
            }
            Self::UnknownReference(id) => write!(f, "unknown catalog reference: {}", id),
            Self::DuplicateItem(id) => write!(f, "duplicate item id: {}", id),
            Self::PlacementOutOfBounds {
                item_id,
                page,
                row,
                col,
            } => write!(
                f,
                "placement of '{}' at page {} ({}, {}) is out of bounds",
                item_id, page, row, col
            ),
            Self::PlacementConflict { item_id, blocking } => {
                write!(f, "placement of '{}' overlaps '{}'", item_id, blocking)
            }
            Self::NoFreeSlot(id) => write!(f, "no page can hold '{}'", id),
            Self::TooManyPages { requested, max } => {
                write!(f, "{} pages requested (max: {})", requested, max)
            }
            Self::InvariantViolation(msg) => write!(f, "invariant violation: {}", msg),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type alias for grid operations
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::PageIndexOutOfBounds { index: 5, count: 2 };
        assert_eq!(err.to_string(), "page index 5 out of bounds (count: 2)");

        let err = GridError::InvalidFootprint {
            width: 0,
            height: 2,
        };
        assert_eq!(err.to_string(), "invalid footprint 0x2");

        let err = GridError::UnknownReference("app:ghost".to_string());
        assert_eq!(err.to_string(), "unknown catalog reference: app:ghost");

        let err = GridError::PlacementConflict {
            item_id: "a".to_string(),
            blocking: "b".to_string(),
        };
        assert_eq!(err.to_string(), "placement of 'a' overlaps 'b'");

        let err = GridError::TooManyPages {
            requested: 40,
            max: 16,
        };
        assert_eq!(err.to_string(), "40 pages requested (max: 16)");
    }

    #[test]
    fn test_error_equality() {
        let err1 = GridError::DuplicateItem("x".to_string());
        let err2 = GridError::DuplicateItem("x".to_string());
        let err3 = GridError::DuplicateItem("y".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_from_json_error() {
        let parse = serde_json::from_str::<u32>("not json");
        let err: GridError = parse.unwrap_err().into();
        assert!(matches!(err, GridError::SerializationError(_)));
    }
}
