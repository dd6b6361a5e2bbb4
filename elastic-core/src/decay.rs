//! Overflow decay: bounded elastic displacement.
//!
//! Maps a raw overflow distance through a logistic sigmoid rescaled to
//! [-1, 1], then back into `[0, max)` for non-negative input:
//!
//! ```text
//! entry   = value / max
//! sigmoid = 2 * (1 / (1 + e^-entry) - 0.5)
//! result  = sigmoid * max
//! ```
//!
//! The curve is steepest at 0 and flattens as the pointer moves further out,
//! which is what gives the drag its "resistance".

/// Default cap on the visual overflow, in layout units.
pub const MAX_OVERFLOW: f64 = 50.0;

/// Bounded displacement for a raw overflow `value` under cap `max`.
///
/// Returns 0 when `max` is 0 or when `value` is NaN. Odd in `value` and
/// even in `max`, so a negative cap behaves like its magnitude.
pub fn decay(value: f64, max: f64) -> f64 {
    if max == 0.0 || value.is_nan() {
        return 0.0;
    }

    let entry = value / max;
    let sigmoid = 2.0 * (1.0 / (1.0 + (-entry).exp()) - 0.5);

    sigmoid * max
}
