//! Motion: animatable values, springs, tweens and derived-value helpers.

pub mod easing;
pub mod spring;
pub mod transform;
pub mod tween;
pub mod value;

pub use easing::{CubicBezier, Ease, NamedEase};
pub use spring::{Spring, SpringOptions};
pub use transform::{interpolate, mix, progress};
pub use tween::{Tween, TweenOptions};
pub use value::{MotionValue, Subscription, TickOutcome, Transition};
