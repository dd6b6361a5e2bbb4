//! Interaction state machine for the elastic volume slider.
//!
//! `ElasticSlider` owns every piece of per-instance state (volume, region,
//! motion values) and is only mutated through the event methods below.
//! The host feeds it pointer/hover/touch events and calls [`ElasticSlider::tick`]
//! once per frame to advance animations.
//!
//! Region transitions:
//!
//! ```text
//!            x < left                 x > right
//!   Middle ───────────▶ Left   Middle ───────────▶ Right
//!     ▲                  │       ▲                   │
//!     └── left ≤ x ≤ right ──────┴── (any sample) ───┘
//! ```
//!
//! On capture loss the overflow springs back to 0. The region is left
//! untouched until that spring settles, then reset to `Middle`, so the
//! flanking icon rides the overflow home instead of snapping.

use tracing::{debug, trace};

use crate::config::SliderConfig;
use crate::decay::decay;
use crate::motion::{MotionValue, Subscription, TickOutcome, Transition, TweenOptions};
use crate::region::{classify, Region, TrackBounds};
use crate::volume::{value_from_pointer, Volume};

#[derive(Debug)]
pub struct ElasticSlider {
    config: SliderConfig,
    volume: Volume,
    raw_value: f64,
    region: Region,
    track: Option<TrackBounds>,
    captured: bool,
    hovered: bool,
    touched: bool,
    region_reset_pending: bool,
    overflow: MotionValue,
    pointer_x: MotionValue,
    scale: MotionValue,
    left_icon_scale: MotionValue,
    right_icon_scale: MotionValue,
}

impl ElasticSlider {
    pub fn new(config: SliderConfig) -> Self {
        let volume = Volume::from_raw(config.initial_volume);
        Self {
            raw_value: f64::from(volume.get()),
            volume,
            region: Region::Middle,
            track: None,
            captured: false,
            hovered: false,
            touched: false,
            region_reset_pending: false,
            overflow: MotionValue::new(0.0),
            pointer_x: MotionValue::new(0.0),
            scale: MotionValue::new(1.0),
            left_icon_scale: MotionValue::new(1.0),
            right_icon_scale: MotionValue::new(1.0),
            config,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Last value reported by the range primitive (0.01 step).
    pub fn raw_value(&self) -> f64 {
        self.raw_value
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn overflow(&self) -> f64 {
        self.overflow.get()
    }

    pub fn pointer_x(&self) -> f64 {
        self.pointer_x.get()
    }

    pub fn scale(&self) -> f64 {
        self.scale.get()
    }

    pub fn left_icon_scale(&self) -> f64 {
        self.left_icon_scale.get()
    }

    pub fn right_icon_scale(&self) -> f64 {
        self.right_icon_scale.get()
    }

    pub fn track(&self) -> Option<TrackBounds> {
        self.track
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_animating(&self) -> bool {
        self.overflow.is_animating()
            || self.scale.is_animating()
            || self.left_icon_scale.is_animating()
            || self.right_icon_scale.is_animating()
    }

    // ── Layout ───────────────────────────────────────────────────────

    /// Record the rendered track bounds.
    pub fn mount(&mut self, bounds: TrackBounds) {
        self.track = Some(bounds);
    }

    pub fn unmount(&mut self) {
        self.track = None;
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn on_overflow_change(&mut self, listener: impl FnMut(f64) + 'static) -> Subscription {
        self.overflow.on_change(listener)
    }

    pub fn on_pointer_x_change(&mut self, listener: impl FnMut(f64) + 'static) -> Subscription {
        self.pointer_x.on_change(listener)
    }

    pub fn unsubscribe_overflow(&mut self, subscription: Subscription) -> bool {
        self.overflow.unsubscribe(subscription)
    }

    pub fn unsubscribe_pointer_x(&mut self, subscription: Subscription) -> bool {
        self.pointer_x.unsubscribe(subscription)
    }

    // ── Hover / touch ────────────────────────────────────────────────

    pub fn hover_start(&mut self) {
        if !self.hovered {
            self.hovered = true;
            self.grow();
        }
    }

    pub fn hover_end(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.shrink();
        }
    }

    pub fn touch_start(&mut self) {
        self.touched = true;
        self.grow();
    }

    pub fn touch_end(&mut self) {
        self.touched = false;
        self.shrink();
    }

    fn grow(&mut self) {
        let transition = Transition::Tween(self.config.hover_tween);
        self.scale.animate_to(self.config.hover_scale, &transition);
    }

    fn shrink(&mut self) {
        let transition = Transition::Tween(self.config.hover_tween);
        self.scale.animate_to(1.0, &transition);
    }

    // ── Pointer ──────────────────────────────────────────────────────

    /// Press on the track: capture the pointer and jump the value under it.
    ///
    /// Returns false (and captures nothing) while the track is unmounted.
    pub fn pointer_down(&mut self, x: f64) -> bool {
        let Some(bounds) = self.track else {
            return false;
        };
        self.captured = true;
        self.region_reset_pending = false;
        debug!(x, "pointer captured");
        self.set_raw_value(value_from_pointer(x, bounds));
        true
    }

    /// A pointer sample. Ignored unless a drag is active (`buttons_held` or
    /// captured) and the track is mounted.
    pub fn pointer_move(&mut self, x: f64, buttons_held: bool) {
        if !(self.captured || buttons_held) {
            return;
        }
        let Some(bounds) = self.track else {
            return;
        };

        if self.captured {
            self.set_raw_value(value_from_pointer(x, bounds));
        }

        // The sample jumps the overflow, cancelling any release spring.
        self.region_reset_pending = false;
        self.pointer_x.jump(x);
        self.reclassify(x, bounds);
    }

    /// The primitive lost pointer capture (button released, pointer
    /// cancelled). Springs the overflow back to 0.
    ///
    /// Also ends an uncaptured drag: samples with `buttons_held` stretch the
    /// track without a capture, and the release still has to bring it home.
    pub fn lost_pointer_capture(&mut self) {
        let was_captured = std::mem::replace(&mut self.captured, false);
        let stretched = self.overflow.get() != 0.0 || self.region != Region::Middle;
        if !was_captured && (self.region_reset_pending || !stretched) {
            return;
        }
        debug!(overflow = self.overflow.get(), region = %self.region, "pointer capture lost");

        let spring = Transition::Spring(self.config.release_spring);
        self.overflow.animate_to(0.0, &spring);

        if self.overflow.is_animating() {
            self.region_reset_pending = true;
        } else {
            self.set_region(Region::Middle);
        }
    }

    fn reclassify(&mut self, x: f64, bounds: TrackBounds) {
        let classification = classify(x, bounds);
        self.set_region(classification.region);

        let bounded = decay(classification.raw_overflow, self.config.max_overflow);
        trace!(
            x,
            raw = classification.raw_overflow,
            overflow = bounded,
            "pointer sample"
        );
        self.overflow.jump(bounded);
    }

    fn set_region(&mut self, region: Region) {
        if region == self.region {
            return;
        }
        let previous = std::mem::replace(&mut self.region, region);
        debug!(from = %previous, to = %region, "region changed");

        let keyframes = self.config.wobble.keyframes();
        let tween = TweenOptions {
            duration: self.config.wobble.duration,
            ..self.config.hover_tween
        };
        let rest = Transition::Tween(tween);

        match region {
            Region::Left => self.left_icon_scale.animate_keyframes(&keyframes, &tween),
            Region::Right => self.right_icon_scale.animate_keyframes(&keyframes, &tween),
            Region::Middle => {}
        }
        match previous {
            Region::Left => self.left_icon_scale.animate_to(1.0, &rest),
            Region::Right => self.right_icon_scale.animate_to(1.0, &rest),
            Region::Middle => {}
        }
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    /// Move the volume by whole steps (arrow keys, page keys).
    pub fn step_volume(&mut self, delta: i32) {
        let next = self.volume.step_by(delta);
        self.set_raw_value(f64::from(next.get()));
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.set_raw_value(f64::from(volume.get()));
    }

    fn set_raw_value(&mut self, raw: f64) {
        self.raw_value = raw;
        let committed = Volume::from_raw(raw);
        if committed != self.volume {
            trace!(from = self.volume.get(), to = committed.get(), "volume changed");
            self.volume = committed;
        }
    }

    // ── Frame ────────────────────────────────────────────────────────

    /// Advance all animations by `dt` seconds. Returns true while anything
    /// is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        let overflow = self.overflow.tick(dt);
        self.scale.tick(dt);
        self.left_icon_scale.tick(dt);
        self.right_icon_scale.tick(dt);

        if overflow == TickOutcome::Finished && self.region_reset_pending && !self.captured {
            self.region_reset_pending = false;
            self.set_region(Region::Middle);
        }

        self.is_animating()
    }
}

impl Default for ElasticSlider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}
