//! Elastic Core: model for an elastic-overflow volume slider.
//!
//! This crate contains everything that is not rendering:
//! - Overflow decay (bounded sigmoid displacement)
//! - Region classifier (left / right / middle of the track)
//! - Volume value and the range mapping of the slider primitive
//! - Motion values with spring, tween and keyframe animation
//! - The interaction state machine driving all of the above
//! - Visual bindings derived from interaction state
//! - TOML configuration

pub mod config;
pub mod decay;
pub mod error;
pub mod motion;
pub mod region;
pub mod slider;
pub mod visual;
pub mod volume;

pub use config::SliderConfig;
pub use decay::{decay, MAX_OVERFLOW};
pub use error::ConfigError;
pub use region::{classify, Classification, Region, TrackBounds};
pub use slider::ElasticSlider;
pub use visual::{SliderVisuals, TransformOrigin};
pub use volume::Volume;
