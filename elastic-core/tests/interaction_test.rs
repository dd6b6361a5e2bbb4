//! End-to-end drag / release scenarios against the public API.

use std::cell::RefCell;
use std::rc::Rc;

use elastic_core::motion::SpringOptions;
use elastic_core::{
    decay, ElasticSlider, Region, SliderConfig, SliderVisuals, TrackBounds, TransformOrigin, Volume,
};

const FRAME: f64 = 1.0 / 60.0;

fn slider_on_track(left: f64, right: f64) -> ElasticSlider {
    let mut slider = ElasticSlider::new(SliderConfig::default());
    slider.mount(TrackBounds::new(left, right));
    slider
}

fn run_until_settled(slider: &mut ElasticSlider) -> usize {
    let mut frames = 0;
    while slider.tick(FRAME) {
        frames += 1;
        assert!(frames < 5_000, "slider never settled");
    }
    frames
}

#[test]
fn classification_examples() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.pointer_down(100.0);

    slider.pointer_move(-10.0, true);
    assert_eq!(slider.region(), Region::Left);
    assert!((slider.overflow() - decay(10.0, 50.0)).abs() < 1e-12);

    slider.pointer_move(210.0, true);
    assert_eq!(slider.region(), Region::Right);
    assert!((slider.overflow() - decay(10.0, 50.0)).abs() < 1e-12);

    slider.pointer_move(100.0, true);
    assert_eq!(slider.region(), Region::Middle);
    assert_eq!(slider.overflow(), 0.0);
}

#[test]
fn drag_fifty_past_left_edge() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.pointer_down(100.0);
    slider.pointer_move(-50.0, true);

    assert_eq!(slider.region(), Region::Left);
    let overflow = slider.overflow();
    assert!(overflow < 50.0);
    assert!((overflow - 23.105_857_863).abs() < 1e-6);
}

#[test]
fn release_settles_overflow_at_zero() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.pointer_down(100.0);
    slider.pointer_move(400.0, true);
    assert!(slider.overflow() > 40.0);

    slider.lost_pointer_capture();
    let frames = run_until_settled(&mut slider);

    assert!(frames > 5, "release should animate, not jump");
    assert_eq!(slider.overflow(), 0.0);
    assert_eq!(slider.region(), Region::Middle);
    assert_eq!(slider.volume(), Volume::FULL);
}

#[test]
fn uncaptured_drag_release_settles_overflow_at_zero() {
    let mut slider = slider_on_track(0.0, 200.0);
    assert!(!slider.is_captured());

    // Button held but the press landed off the track.
    slider.pointer_move(-40.0, true);
    assert_eq!(slider.region(), Region::Left);
    assert!(slider.overflow() > 0.0);
    assert_eq!(slider.volume(), Volume::default());

    slider.lost_pointer_capture();
    assert!(slider.is_animating());
    run_until_settled(&mut slider);

    assert_eq!(slider.overflow(), 0.0);
    assert_eq!(slider.region(), Region::Middle);
    assert_eq!(slider.left_icon_scale(), 1.0);
}

#[test]
fn second_uncaptured_drag_during_release_still_settles() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.pointer_move(260.0, true);
    slider.lost_pointer_capture();
    slider.tick(FRAME);

    slider.pointer_move(280.0, true);
    assert_eq!(slider.region(), Region::Right);
    slider.lost_pointer_capture();
    run_until_settled(&mut slider);

    assert_eq!(slider.overflow(), 0.0);
    assert_eq!(slider.region(), Region::Middle);
}

#[test]
fn release_without_drag_is_a_no_op() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.lost_pointer_capture();
    assert!(!slider.is_animating());
    assert_eq!(slider.region(), Region::Middle);
}

#[test]
fn bouncy_release_overshoots_then_rests() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.pointer_down(100.0);
    slider.pointer_move(-400.0, true);
    slider.lost_pointer_capture();

    let mut min_seen = f64::MAX;
    while slider.tick(FRAME) {
        min_seen = min_seen.min(slider.overflow());
    }
    assert!(min_seen < 0.0, "bounce 0.5 should swing past zero");
    assert_eq!(slider.overflow(), 0.0);
}

#[test]
fn stiff_release_never_goes_negative() {
    let config = SliderConfig {
        release_spring: SpringOptions::with_bounce(0.0),
        ..SliderConfig::default()
    };
    let mut slider = ElasticSlider::new(config);
    slider.mount(TrackBounds::new(0.0, 200.0));
    slider.pointer_down(100.0);
    slider.pointer_move(-400.0, true);
    slider.lost_pointer_capture();

    while slider.tick(FRAME) {
        assert!(slider.overflow() >= 0.0);
    }
}

#[test]
fn pointer_x_listener_receives_every_sample() {
    let samples = Rc::new(RefCell::new(Vec::new()));
    let mut slider = slider_on_track(0.0, 200.0);
    let sink = Rc::clone(&samples);
    slider.on_pointer_x_change(move |x| sink.borrow_mut().push(x));

    slider.pointer_down(50.0);
    for x in [60.0, -20.0, 230.0] {
        slider.pointer_move(x, true);
    }
    slider.pointer_move(500.0, false); // released: still captured, so counted
    slider.lost_pointer_capture();
    slider.pointer_move(700.0, false); // no capture, no buttons: ignored

    assert_eq!(*samples.borrow(), vec![60.0, -20.0, 230.0, 500.0]);
}

#[test]
fn track_remount_uses_new_bounds() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.pointer_down(100.0);
    slider.mount(TrackBounds::new(100.0, 300.0));
    slider.pointer_move(50.0, true);
    assert_eq!(slider.region(), Region::Left);
    assert!((slider.overflow() - decay(50.0, 50.0)).abs() < 1e-12);
}

#[test]
fn unmount_mid_drag_freezes_state() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.pointer_down(100.0);
    slider.pointer_move(-30.0, true);
    let before = slider.overflow();

    slider.unmount();
    slider.pointer_move(-300.0, true);
    assert_eq!(slider.overflow(), before);
    assert_eq!(slider.region(), Region::Left);
}

#[test]
fn visuals_follow_a_full_gesture() {
    let mut slider = slider_on_track(0.0, 200.0);
    slider.hover_start();
    run_until_settled(&mut slider);

    slider.pointer_down(100.0);
    slider.pointer_move(260.0, true);
    let stretched = SliderVisuals::from_slider(&slider);
    assert_eq!(stretched.track_origin, TransformOrigin::Left);
    assert!(stretched.track_scale_x > 1.0);
    assert!(stretched.right_icon_x > 0.0);
    assert_eq!(stretched.root_opacity, 1.0);

    slider.lost_pointer_capture();
    slider.hover_end();
    run_until_settled(&mut slider);
    let rest = SliderVisuals::from_slider(&slider);
    assert_eq!(rest.track_scale_x, 1.0);
    assert_eq!(rest.right_icon_x, 0.0);
    assert_eq!(rest.root_opacity, 0.7);
    assert_eq!(rest.fill, 1.0);
}
