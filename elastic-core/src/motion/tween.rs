//! Duration-based tweens over one or more keyframes.

use serde::{Deserialize, Serialize};

use super::easing::Ease;
use super::transform::mix;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenOptions {
    /// Total duration in seconds.
    pub duration: f64,
    /// Easing applied to each keyframe segment.
    pub ease: Ease,
}

impl Default for TweenOptions {
    fn default() -> Self {
        Self {
            duration: 0.3,
            ease: Ease::STANDARD,
        }
    }
}

impl TweenOptions {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }
}

/// Tween through evenly spaced keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    keyframes: Vec<f64>,
    duration: f64,
    ease: Ease,
    elapsed: f64,
}

impl Tween {
    /// Tween from `from` to `to`.
    pub fn between(from: f64, to: f64, options: &TweenOptions) -> Self {
        Self::keyframes(vec![from, to], options)
    }

    /// Tween through `keyframes`. An empty list behaves as a finished tween
    /// at 0; a single frame finishes immediately on that value.
    pub fn keyframes(keyframes: Vec<f64>, options: &TweenOptions) -> Self {
        Self {
            keyframes,
            duration: options.duration.max(0.0),
            ease: options.ease,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.keyframes.last().copied().unwrap_or(0.0)
    }

    pub fn is_done(&self) -> bool {
        self.keyframes.len() < 2 || self.elapsed >= self.duration
    }

    /// Current value without advancing.
    pub fn value(&self) -> f64 {
        if self.is_done() {
            return self.target();
        }

        let segments = self.keyframes.len() - 1;
        let overall = self.elapsed / self.duration;
        let scaled = overall * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;

        mix(
            self.keyframes[index],
            self.keyframes[index + 1],
            self.ease.apply(local),
        )
    }

    /// Advance by `dt` seconds. Returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }
}
