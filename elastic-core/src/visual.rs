//! Visual bindings: style properties derived from slider state.
//!
//! Nothing here is stored; every frame the renderer asks for a fresh
//! [`SliderVisuals`] snapshot.

use serde::Serialize;

use crate::motion::interpolate;
use crate::region::Region;
use crate::slider::ElasticSlider;

/// Edge the track stretches away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformOrigin {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderVisuals {
    /// Scale of the whole widget (hover / touch).
    pub root_scale: f64,
    pub root_opacity: f64,
    pub track_scale_x: f64,
    pub track_scale_y: f64,
    pub track_origin: TransformOrigin,
    pub track_height: f64,
    pub track_margin: f64,
    /// Horizontal offset of the left icon, in layout units. Outward (≤ 0)
    /// while dragging; may briefly cross 0 while a bouncy release settles.
    pub left_icon_x: f64,
    /// Horizontal offset of the right icon, in layout units. Outward (≥ 0)
    /// while dragging; may briefly cross 0 while a bouncy release settles.
    pub right_icon_x: f64,
    pub left_icon_scale: f64,
    pub right_icon_scale: f64,
    /// Committed volume as a fraction of the range.
    pub fill: f64,
}

impl SliderVisuals {
    pub fn from_slider(slider: &ElasticSlider) -> Self {
        let config = slider.config();
        let scale = slider.scale();
        let overflow = slider.overflow();
        let hover_range = [1.0, config.hover_scale];

        let (track_scale_x, track_origin) = match slider.track() {
            Some(bounds) => {
                let width = bounds.width();
                let scale_x = if width > 0.0 { 1.0 + overflow / width } else { 1.0 };
                let origin = if slider.pointer_x() < bounds.center() {
                    TransformOrigin::Right
                } else {
                    TransformOrigin::Left
                };
                (scale_x, origin)
            }
            None => (1.0, TransformOrigin::Left),
        };

        let track_scale_y = if config.max_overflow > 0.0 {
            interpolate(
                overflow,
                &[0.0, config.max_overflow],
                &[1.0, config.track.squash],
            )
        } else {
            1.0
        };

        let icon_shift = if scale != 0.0 { overflow / scale } else { 0.0 };

        Self {
            root_scale: scale,
            root_opacity: interpolate(
                scale,
                &hover_range,
                &[config.opacity.idle, config.opacity.hover],
            ),
            track_scale_x,
            track_scale_y,
            track_origin,
            track_height: interpolate(
                scale,
                &hover_range,
                &[config.track.idle_height, config.track.hover_height],
            ),
            track_margin: interpolate(scale, &hover_range, &[0.0, config.track.hover_margin]),
            left_icon_x: if slider.region() == Region::Left { -icon_shift } else { 0.0 },
            right_icon_x: if slider.region() == Region::Right { icon_shift } else { 0.0 },
            left_icon_scale: slider.left_icon_scale(),
            right_icon_scale: slider.right_icon_scale(),
            fill: slider.volume().as_fraction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decay::decay;
    use crate::region::TrackBounds;

    fn dragged_to(x: f64) -> ElasticSlider {
        let mut slider = ElasticSlider::default();
        slider.mount(TrackBounds::new(0.0, 200.0));
        slider.pointer_down(100.0);
        slider.pointer_move(x, true);
        slider
    }

    #[test]
    fn idle_visuals() {
        let v = SliderVisuals::from_slider(&ElasticSlider::default());
        assert_eq!(v.root_scale, 1.0);
        assert_eq!(v.root_opacity, 0.7);
        assert_eq!(v.track_scale_x, 1.0);
        assert_eq!(v.track_scale_y, 1.0);
        assert_eq!(v.track_height, 6.0);
        assert_eq!(v.track_margin, 0.0);
        assert_eq!(v.left_icon_x, 0.0);
        assert_eq!(v.right_icon_x, 0.0);
        assert_eq!(v.fill, 0.5);
    }

    #[test]
    fn left_overflow_stretches_from_the_right_edge() {
        let v = SliderVisuals::from_slider(&dragged_to(-50.0));
        let overflow = decay(50.0, 50.0);
        assert!((v.track_scale_x - (1.0 + overflow / 200.0)).abs() < 1e-9);
        assert!(v.track_scale_y < 1.0 && v.track_scale_y > 0.8);
        assert_eq!(v.track_origin, TransformOrigin::Right);
        assert!((v.left_icon_x + overflow).abs() < 1e-9);
        assert_eq!(v.right_icon_x, 0.0);
    }

    #[test]
    fn right_overflow_moves_right_icon() {
        let v = SliderVisuals::from_slider(&dragged_to(260.0));
        let overflow = decay(60.0, 50.0);
        assert_eq!(v.track_origin, TransformOrigin::Left);
        assert!((v.right_icon_x - overflow).abs() < 1e-9);
        assert_eq!(v.left_icon_x, 0.0);
    }

    #[test]
    fn hovered_visuals() {
        let mut slider = ElasticSlider::default();
        slider.hover_start();
        while slider.tick(1.0 / 60.0) {}
        let v = SliderVisuals::from_slider(&slider);
        assert_eq!(v.root_scale, 1.2);
        assert_eq!(v.root_opacity, 1.0);
        assert_eq!(v.track_height, 12.0);
        assert_eq!(v.track_margin, -3.0);
    }

    #[test]
    fn icon_offset_is_divided_by_root_scale() {
        let mut slider = dragged_to(-50.0);
        slider.hover_start();
        while slider.tick(1.0 / 60.0) {}
        let v = SliderVisuals::from_slider(&slider);
        assert!((v.left_icon_x + slider.overflow() / 1.2).abs() < 1e-9);
    }
}
