//! Region classifier: which side of the track the pointer has left by.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of the track the pointer currently exceeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Left,
    Right,
    #[default]
    Middle,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Left => "left",
            Region::Right => "right",
            Region::Middle => "middle",
        }
    }

    pub fn is_overflowing(self) -> bool {
        self != Region::Middle
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Horizontal screen bounds of the mounted track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackBounds {
    pub left: f64,
    pub right: f64,
}

impl TrackBounds {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn center(&self) -> f64 {
        self.left + self.width() / 2.0
    }
}

/// Result of classifying one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub region: Region,
    /// Distance past the edge, before decay. Zero in the middle.
    pub raw_overflow: f64,
}

/// Classify a pointer x coordinate against the track bounds.
pub fn classify(pointer_x: f64, bounds: TrackBounds) -> Classification {
    if pointer_x < bounds.left {
        Classification {
            region: Region::Left,
            raw_overflow: bounds.left - pointer_x,
        }
    } else if pointer_x > bounds.right {
        Classification {
            region: Region::Right,
            raw_overflow: pointer_x - bounds.right,
        }
    } else {
        Classification {
            region: Region::Middle,
            raw_overflow: 0.0,
        }
    }
}
