use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Width × height of an item in cells
///
/// Both dimensions are always at least 1. Construction goes through
/// [`Footprint::new`], and deserialization applies the same check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFootprint")]
pub struct Footprint {
    width: u8,
    height: u8,
}

#[derive(Deserialize)]
struct RawFootprint {
    width: u8,
    height: u8,
}

impl TryFrom<RawFootprint> for Footprint {
    type Error = GridError;

    fn try_from(raw: RawFootprint) -> GridResult<Self> {
        Footprint::new(raw.width, raw.height)
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::WIDGET
    }
}

impl Footprint {
    /// Single cell, the footprint of every app
    pub const UNIT: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    /// Default widget footprint
    pub const WIDGET: Footprint = Footprint {
        width: 2,
        height: 2,
    };

    /// Create a footprint, rejecting zero dimensions
    pub fn new(width: u8, height: u8) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidFootprint { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of cells covered
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            Footprint::new(0, 2),
            Err(GridError::InvalidFootprint {
                width: 0,
                height: 2
            })
        );
        assert!(Footprint::new(2, 0).is_err());
        assert!(Footprint::new(1, 1).is_ok());
    }

    #[test]
    fn test_default_is_widget() {
        assert_eq!(Footprint::default(), Footprint::WIDGET);
        assert_eq!(Footprint::WIDGET.cell_count(), 4);
        assert_eq!(Footprint::UNIT.cell_count(), 1);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Footprint = serde_json::from_str(r#"{"width":4,"height":2}"#).unwrap();
        assert_eq!(ok.width(), 4);
        assert_eq!(ok.height(), 2);

        let bad = serde_json::from_str::<Footprint>(r#"{"width":0,"height":2}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Footprint::WIDGET.to_string(), "2x2");
    }
}
