//! Easing curves for tweens.

use serde::{Deserialize, Serialize};

/// Easing applied to the progress of a tween segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ease {
    /// Cubic bezier control points `[x1, y1, x2, y2]`.
    Bezier([f64; 4]),
    Named(NamedEase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedEase {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Ease {
    /// Default curve for value tweens: a quick start with a soft landing.
    pub const STANDARD: Ease = Ease::Bezier([0.25, 0.1, 0.35, 1.0]);

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Bezier([x1, y1, x2, y2]) => CubicBezier::new(*x1, *y1, *x2, *y2).solve(t),
            Ease::Named(NamedEase::Linear) => t,
            Ease::Named(NamedEase::EaseIn) => CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(t),
            Ease::Named(NamedEase::EaseOut) => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(t),
            Ease::Named(NamedEase::EaseInOut) => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(t),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::STANDARD
    }
}

/// CSS-style cubic bezier through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const SUBDIVISION_ITERATIONS: usize = 24;
const PRECISION: f64 = 1e-7;

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        // x control points must stay in [0, 1] for x(t) to be monotone.
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Eased output for progress `x` in [0, 1].
    pub fn solve(&self, x: f64) -> f64 {
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.t_for_x(x);
        sample(t, self.y1, self.y2)
    }

    fn t_for_x(&self, x: f64) -> f64 {
        // Newton-Raphson first, bisection when the slope is too flat.
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(t, self.x1, self.x2) - x;
            if err.abs() < PRECISION {
                return t;
            }
            let slope = slope(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..SUBDIVISION_ITERATIONS {
            let value = sample(t, self.x1, self.x2);
            if (value - x).abs() < PRECISION {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    // B(t) with P0 = 0, P3 = 1
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for ease in [
            Ease::STANDARD,
            Ease::Named(NamedEase::Linear),
            Ease::Named(NamedEase::EaseInOut),
        ] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        let b = CubicBezier::new(0.3, 0.3, 0.7, 0.7);
        assert_eq!(b.solve(0.42), 0.42);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let ease = Ease::Named(NamedEase::EaseInOut);
        let a = ease.apply(0.25);
        let b = ease.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-5);
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn standard_curve_runs_ahead_of_linear() {
        let out = Ease::STANDARD.apply(0.5);
        assert!(out > 0.5 && out < 1.0);
    }

    #[test]
    fn monotone_over_progress() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = Ease::STANDARD.apply(i as f64 / 100.0);
            assert!(v >= prev - 1e-9);
            prev = v;
        }
    }

    #[test]
    fn deserializes_bezier_and_named() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            ease: Ease,
        }
        let w: Wrap = toml::from_str("ease = [0.25, 0.1, 0.35, 1.0]").unwrap();
        assert_eq!(w.ease, Ease::STANDARD);
        let w: Wrap = toml::from_str("ease = \"ease_in_out\"").unwrap();
        assert_eq!(w.ease, Ease::Named(NamedEase::EaseInOut));
    }
}
