//! Slider configuration: TOML-loadable tuning for the overflow physics and
//! visual bindings.
//!
//! Every field has a default, so an empty file (or a partial one) is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decay::MAX_OVERFLOW;
use crate::error::ConfigError;
use crate::motion::{SpringOptions, TweenOptions};
use crate::volume::{VOLUME_MAX, VOLUME_MIN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Cap on the visual overflow, in layout units.
    pub max_overflow: f64,
    /// Volume shown before any input, in [0, 100].
    pub initial_volume: f64,
    /// Root scale while hovered or touched.
    pub hover_scale: f64,
    /// Spring used to pull the overflow back to 0 on release.
    pub release_spring: SpringOptions,
    /// Tween used for hover scale changes.
    pub hover_tween: TweenOptions,
    pub wobble: WobbleOptions,
    pub track: TrackStyle,
    pub opacity: OpacityRange,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            max_overflow: MAX_OVERFLOW,
            initial_volume: 50.0,
            hover_scale: 1.2,
            release_spring: SpringOptions::with_bounce(0.5),
            hover_tween: TweenOptions::default(),
            wobble: WobbleOptions::default(),
            track: TrackStyle::default(),
            opacity: OpacityRange::default(),
        }
    }
}

/// Icon pulse played when the pointer crosses past an edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WobbleOptions {
    pub peak: f64,
    pub duration: f64,
}

impl Default for WobbleOptions {
    fn default() -> Self {
        Self {
            peak: 1.4,
            duration: 0.25,
        }
    }
}

impl WobbleOptions {
    pub fn keyframes(&self) -> [f64; 3] {
        [1.0, self.peak, 1.0]
    }
}

/// Track thickness at rest and when hovered, plus vertical squash at full
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackStyle {
    pub idle_height: f64,
    pub hover_height: f64,
    /// Vertical margin at hover scale (negative pulls neighbours in).
    pub hover_margin: f64,
    /// `scale_y` reached at `max_overflow`.
    pub squash: f64,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            idle_height: 6.0,
            hover_height: 12.0,
            hover_margin: -3.0,
            squash: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpacityRange {
    pub idle: f64,
    pub hover: f64,
}

impl Default for OpacityRange {
    fn default() -> Self {
        Self {
            idle: 0.7,
            hover: 1.0,
        }
    }
}

impl SliderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_overflow.is_finite() || self.max_overflow < 0.0 {
            return Err(ConfigError::invalid(
                "max_overflow",
                format!("must be a finite, non-negative number (got {})", self.max_overflow),
            ));
        }
        if !(VOLUME_MIN..=VOLUME_MAX).contains(&self.initial_volume) {
            return Err(ConfigError::invalid(
                "initial_volume",
                format!("must be within {VOLUME_MIN}..={VOLUME_MAX} (got {})", self.initial_volume),
            ));
        }
        if !(self.hover_scale.is_finite() && self.hover_scale > 0.0) {
            return Err(ConfigError::invalid(
                "hover_scale",
                format!("must be positive (got {})", self.hover_scale),
            ));
        }
        if !(0.0..=1.0).contains(&self.release_spring.bounce) {
            return Err(ConfigError::invalid(
                "release_spring.bounce",
                format!("must be within 0..=1 (got {})", self.release_spring.bounce),
            ));
        }
        positive("release_spring.duration", self.release_spring.duration)?;
        positive("hover_tween.duration", self.hover_tween.duration)?;
        positive("wobble.duration", self.wobble.duration)?;
        if self.release_spring.rest_delta < 0.0 || self.release_spring.rest_speed < 0.0 {
            return Err(ConfigError::invalid(
                "release_spring",
                "rest_delta and rest_speed must not be negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity.idle) || !(0.0..=1.0).contains(&self.opacity.hover) {
            return Err(ConfigError::invalid("opacity", "values must be within 0..=1"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive (got {value})")))
    }
}
