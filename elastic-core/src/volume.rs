//! Volume value and the range mapping of the slider primitive.
//!
//! The primitive reports values in [0, 100] at a 0.01 step; the slider
//! commits the integer part.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::region::TrackBounds;

pub const VOLUME_MIN: f64 = 0.0;
pub const VOLUME_MAX: f64 = 100.0;
/// Resolution of raw values reported by the range primitive.
pub const VOLUME_STEP: f64 = 0.01;

/// Committed volume, an integer in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Volume(u8);

impl Volume {
    pub const MUTED: Volume = Volume(0);
    pub const FULL: Volume = Volume(100);

    /// Commit a raw primitive value: clamp to range, then floor.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Volume::MUTED;
        }
        let clamped = raw.clamp(VOLUME_MIN, VOLUME_MAX);
        Volume(clamped.floor() as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / VOLUME_MAX
    }

    pub fn is_muted(self) -> bool {
        self.0 == 0
    }

    /// Move by `delta` whole steps, saturating at the range ends.
    pub fn step_by(self, delta: i32) -> Self {
        let next = (i32::from(self.0) + delta).clamp(VOLUME_MIN as i32, VOLUME_MAX as i32);
        Volume(next as u8)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(50)
    }
}

impl TryFrom<u8> for Volume {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if f64::from(value) > VOLUME_MAX {
            Err(format!("volume {value} exceeds {VOLUME_MAX}"))
        } else {
            Ok(Volume(value))
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Volume> for u8 {
    fn from(v: Volume) -> Self {
        v.0
    }
}

/// Raw primitive value for a pointer position over the track.
///
/// Positions outside the track clamp to the range ends; a zero-width track
/// reports the minimum.
pub fn value_from_pointer(pointer_x: f64, bounds: TrackBounds) -> f64 {
    let width = bounds.width();
    if width <= 0.0 || pointer_x.is_nan() {
        return VOLUME_MIN;
    }
    let fraction = ((pointer_x - bounds.left) / width).clamp(0.0, 1.0);
    let raw = VOLUME_MIN + fraction * (VOLUME_MAX - VOLUME_MIN);
    snap_to_step(raw)
}

fn snap_to_step(raw: f64) -> f64 {
    let snapped = (raw / VOLUME_STEP).round() * VOLUME_STEP;
    snapped.clamp(VOLUME_MIN, VOLUME_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_floors() {
        assert_eq!(Volume::from_raw(42.99).get(), 42);
        assert_eq!(Volume::from_raw(42.0).get(), 42);
        assert_eq!(Volume::from_raw(0.5).get(), 0);
    }

    #[test]
    fn from_raw_clamps() {
        assert_eq!(Volume::from_raw(-3.0), Volume::MUTED);
        assert_eq!(Volume::from_raw(130.0), Volume::FULL);
        assert_eq!(Volume::from_raw(f64::NAN), Volume::MUTED);
    }

    #[test]
    fn step_saturates() {
        assert_eq!(Volume::from_raw(99.0).step_by(5), Volume::FULL);
        assert_eq!(Volume::from_raw(2.0).step_by(-10), Volume::MUTED);
        assert_eq!(Volume::default().step_by(1).get(), 51);
    }

    #[test]
    fn pointer_maps_across_track() {
        let b = TrackBounds::new(100.0, 300.0);
        assert_eq!(value_from_pointer(100.0, b), 0.0);
        assert_eq!(value_from_pointer(300.0, b), 100.0);
        assert!((value_from_pointer(200.0, b) - 50.0).abs() < 1e-9);
        assert!((value_from_pointer(101.0, b) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pointer_outside_track_clamps() {
        let b = TrackBounds::new(100.0, 300.0);
        assert_eq!(value_from_pointer(-50.0, b), 0.0);
        assert_eq!(value_from_pointer(900.0, b), 100.0);
    }

    #[test]
    fn zero_width_track_reports_min() {
        let b = TrackBounds::new(10.0, 10.0);
        assert_eq!(value_from_pointer(10.0, b), 0.0);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(Volume::try_from(101u8).is_err());
        assert_eq!(Volume::try_from(100u8), Ok(Volume::FULL));
    }
}
