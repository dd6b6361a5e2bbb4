//! Motion values: animatable scalars with change listeners.
//!
//! A `MotionValue` holds the latest value, an optional running animation and
//! a list of listeners. All dispatch is synchronous on the owning thread:
//! listeners run inside `jump` / `tick` before those calls return.

use std::fmt;

use super::spring::{Spring, SpringOptions};
use super::tween::{Tween, TweenOptions};

/// How a value should travel to a new target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Spring(SpringOptions),
    Tween(TweenOptions),
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Tween(TweenOptions::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Animation {
    Spring(Spring),
    Tween(Tween),
}

impl Animation {
    fn step(&mut self, dt: f64) -> f64 {
        match self {
            Animation::Spring(s) => s.step(dt),
            Animation::Tween(t) => t.step(dt),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Animation::Spring(s) => s.is_done(),
            Animation::Tween(t) => t.is_done(),
        }
    }

    fn target(&self) -> f64 {
        match self {
            Animation::Spring(s) => s.target(),
            Animation::Tween(t) => t.target(),
        }
    }
}

/// Result of advancing a motion value by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was running.
    Idle,
    /// An animation is still in flight.
    Running,
    /// The running animation reached its target during this tick.
    Finished,
}

/// Handle returned by [`MotionValue::on_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(f64)>;

pub struct MotionValue {
    current: f64,
    velocity: f64,
    animation: Option<Animation>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl MotionValue {
    pub fn new(initial: f64) -> Self {
        Self {
            current: initial,
            velocity: 0.0,
            animation: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn get(&self) -> f64 {
        self.current
    }

    /// Units per second, as measured over the last tick.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Target of the running animation, if any.
    pub fn animation_target(&self) -> Option<f64> {
        self.animation.as_ref().map(Animation::target)
    }

    /// Set the value immediately, cancelling any animation and zeroing
    /// velocity.
    pub fn jump(&mut self, value: f64) {
        self.animation = None;
        self.velocity = 0.0;
        self.update(value);
    }

    /// Set the value without touching a running animation; the next tick
    /// overrides it.
    pub fn set(&mut self, value: f64) {
        self.update(value);
    }

    /// Start animating toward `target`, replacing any running animation.
    /// The current velocity seeds springs.
    pub fn animate_to(&mut self, target: f64, transition: &Transition) {
        let animation = match transition {
            Transition::Spring(options) => {
                Animation::Spring(Spring::new(self.current, target, self.velocity, options))
            }
            Transition::Tween(options) => {
                Animation::Tween(Tween::between(self.current, target, options))
            }
        };
        self.start(animation);
    }

    /// Tween through `keyframes`, replacing any running animation.
    pub fn animate_keyframes(&mut self, keyframes: &[f64], options: &TweenOptions) {
        self.start(Animation::Tween(Tween::keyframes(keyframes.to_vec(), options)));
    }

    /// Cancel the running animation, leaving the value where it is.
    pub fn stop(&mut self) {
        self.animation = None;
        self.velocity = 0.0;
    }

    /// Advance the running animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> TickOutcome {
        let Some(animation) = self.animation.as_mut() else {
            return TickOutcome::Idle;
        };

        let previous = self.current;
        let next = animation.step(dt);
        let done = animation.is_done();

        self.velocity = match (done, animation) {
            (true, _) => 0.0,
            (false, Animation::Spring(s)) => s.velocity(),
            (false, Animation::Tween(_)) if dt > 0.0 => (next - previous) / dt,
            (false, Animation::Tween(_)) => self.velocity,
        };
        if done {
            self.animation = None;
        }
        self.update(next);

        if done {
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    /// Register a listener called with every new value.
    pub fn on_change(&mut self, listener: impl FnMut(f64) + 'static) -> Subscription {
        let id = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false when it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn start(&mut self, mut animation: Animation) {
        if animation.is_done() {
            // Nothing to animate: land on the target now.
            self.animation = None;
            self.velocity = 0.0;
            self.update(animation.step(0.0));
            return;
        }
        self.animation = Some(animation);
    }

    fn update(&mut self, value: f64) {
        if value == self.current {
            return;
        }
        self.current = value;
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }
}

impl Default for MotionValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for MotionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionValue")
            .field("current", &self.current)
            .field("velocity", &self.velocity)
            .field("animation", &self.animation)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
