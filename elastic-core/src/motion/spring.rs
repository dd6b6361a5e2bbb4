//! Damped spring animation.
//!
//! Springs are configured the way designers think about them: a `bounce`
//! in [0, 1] and a perceived `duration`. Both are converted to a stiffness
//! and damping pair for a unit mass:
//!
//! ```text
//! omega     = 2π / (duration * 1.2)
//! stiffness = omega²
//! damping   = 2 * (1 - bounce) * omega
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Largest integration step. Frames longer than this are subdivided.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;
/// Lowest damping ratio allowed; bounce 1 would otherwise never settle.
const MIN_DAMPING_RATIO: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringOptions {
    /// 0 is critically damped, 1 oscillates for a long time.
    pub bounce: f64,
    /// Perceived duration in seconds.
    pub duration: f64,
    /// Distance from the target at which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringOptions {
    fn default() -> Self {
        Self {
            bounce: 0.25,
            duration: 0.5,
            rest_delta: 0.5,
            rest_speed: 2.0,
        }
    }
}

impl SpringOptions {
    pub fn with_bounce(bounce: f64) -> Self {
        Self {
            bounce,
            ..Self::default()
        }
    }

    pub fn stiffness(&self) -> f64 {
        let omega = self.angular_frequency();
        omega * omega
    }

    pub fn damping(&self) -> f64 {
        2.0 * self.damping_ratio() * self.angular_frequency()
    }

    pub fn damping_ratio(&self) -> f64 {
        (1.0 - self.bounce).clamp(MIN_DAMPING_RATIO, 1.0)
    }

    fn angular_frequency(&self) -> f64 {
        2.0 * PI / (self.duration.max(f64::EPSILON) * 1.2)
    }
}

/// A running spring from the current position toward `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_delta: f64,
    rest_speed: f64,
    done: bool,
}

impl Spring {
    pub fn new(from: f64, target: f64, initial_velocity: f64, options: &SpringOptions) -> Self {
        let mut spring = Self {
            position: from,
            velocity: initial_velocity,
            target,
            stiffness: options.stiffness(),
            damping: options.damping(),
            rest_delta: options.rest_delta,
            rest_speed: options.rest_speed,
            done: false,
        };
        spring.done = spring.at_rest();
        if spring.done {
            spring.position = target;
            spring.velocity = 0.0;
        }
        spring
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by `dt` seconds. Returns the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.done || dt <= 0.0 {
            return self.position;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            // Semi-implicit Euler: velocity first, then position.
            let force = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.position += self.velocity * h;
            remaining -= h;

            if self.at_rest() {
                self.position = self.target;
                self.velocity = 0.0;
                self.done = true;
                break;
            }
        }
        self.position
    }

    fn at_rest(&self) -> bool {
        (self.target - self.position).abs() <= self.rest_delta && self.velocity.abs() <= self.rest_speed
    }
}
