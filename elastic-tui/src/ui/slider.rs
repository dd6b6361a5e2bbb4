//! The elastic slider widget: flanking icons, stretched track, readout.
//!
//! Terminal cells cannot scale, so the visual bindings are approximated:
//! - root scale widens the track (and the hit area with it)
//! - `track_scale_x` stretches the track away from its transform origin
//! - track thickness picks a block glyph
//! - icon offsets are converted to whole cells
//! - icon scale above rest is shown as bold accent

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use elastic_core::{SliderVisuals, TransformOrigin};

use crate::app::{AppState, SliderLayout};
use crate::theme::{self, Theme};

pub const LEFT_ICON: &str = "🔊";
pub const RIGHT_ICON: &str = "🔇";
/// Columns reserved beside the track for each icon (2-wide glyph + gap).
const ICON_SLOT: u16 = 3;
/// Share of the available width the track takes at rest.
const TRACK_FRACTION: f64 = 0.5;
/// Icon scale above which the icon is drawn emphasised.
const PULSE_THRESHOLD: f64 = 1.05;

/// Compute where the widget sits inside `area` for the given visuals.
///
/// Returns `None` when there is no room for a track between the icons.
pub fn layout(area: Rect, visuals: &SliderVisuals) -> Option<SliderLayout> {
    if area.height == 0 || area.width <= 2 * ICON_SLOT {
        return None;
    }
    let max_track = area.width - 2 * ICON_SLOT;
    let wanted = (f64::from(area.width) * TRACK_FRACTION * visuals.root_scale).round();
    let track_width = (wanted.max(1.0) as u16).min(max_track);

    let root_width = track_width + 2 * ICON_SLOT;
    let root_x = area.x + (area.width - root_width) / 2;
    let row = area.y + area.height.saturating_sub(1) / 2;

    Some(SliderLayout {
        root: Rect::new(root_x, row, root_width, 1),
        track: Rect::new(root_x + ICON_SLOT, row, track_width, 1),
    })
}

/// Glyph for a track of the given thickness in layout units.
pub fn track_glyph(height: f64) -> char {
    match height {
        h if h >= 11.0 => '█',
        h if h >= 9.0 => '▆',
        h if h >= 7.0 => '▅',
        h if h >= 5.0 => '▄',
        _ => '▂',
    }
}

/// Columns covered by the stretched track, clipped to `area`.
pub fn stretched_span(track: Rect, visuals: &SliderVisuals, area: Rect) -> (u16, u16) {
    let width = (f64::from(track.width) * visuals.track_scale_x).round() as i32;
    let start = match visuals.track_origin {
        TransformOrigin::Left => i32::from(track.x),
        TransformOrigin::Right => i32::from(track.x) + i32::from(track.width) - width,
    };
    let lo = start.max(i32::from(area.x));
    let hi = (start + width).min(i32::from(area.x) + i32::from(area.width));
    if hi <= lo {
        return (track.x, 0);
    }
    (lo as u16, (hi - lo) as u16)
}

/// Render the widget and report where it landed.
pub fn render(f: &mut Frame, area: Rect, app: &AppState) -> Option<SliderLayout> {
    let visuals = SliderVisuals::from_slider(&app.slider);
    let placed = layout(area, &visuals)?;
    let theme = Theme::default();

    draw_track(f.buffer_mut(), area, placed.track, &visuals, &theme);
    draw_icons(f.buffer_mut(), area, placed, &visuals, app, &theme);

    let readout_row = placed.root.y + 1;
    if readout_row < area.y + area.height {
        let readout = readout_line(app, &visuals, &theme);
        let rect = Rect::new(area.x, readout_row, area.width, 1);
        f.render_widget(Paragraph::new(readout).centered(), rect);
    }

    if app.show_inspector {
        let top = placed.root.y + 3;
        let bottom = area.y + area.height;
        if top < bottom {
            let rect = Rect::new(area.x, top, area.width, bottom - top);
            f.render_widget(Paragraph::new(inspector_lines(app, &visuals)), rect);
        }
    }

    Some(placed)
}

fn draw_track(buf: &mut Buffer, area: Rect, track: Rect, visuals: &SliderVisuals, theme: &Theme) {
    let (start, width) = stretched_span(track, visuals, area);
    let filled = (visuals.fill * f64::from(width)).round() as u16;
    let glyph = track_glyph(visuals.track_height * visuals.track_scale_y);

    let range = Style::default().fg(theme.fade(theme.range, visuals.root_opacity));
    let rest = Style::default().fg(theme.fade(theme.track, visuals.root_opacity));

    for i in 0..width {
        let style = if i < filled { range } else { rest };
        if let Some(cell) = buf.cell_mut((start + i, track.y)) {
            cell.set_char(glyph).set_style(style);
        }
    }
}

fn draw_icons(
    buf: &mut Buffer,
    area: Rect,
    placed: SliderLayout,
    visuals: &SliderVisuals,
    app: &AppState,
    theme: &Theme,
) {
    let row = placed.root.y;
    let left_x = i32::from(placed.root.x) + app.x_to_cells(visuals.left_icon_x);
    let right_x =
        i32::from(placed.track.x + placed.track.width + 1) + app.x_to_cells(visuals.right_icon_x);

    for (x, glyph, scale) in [
        (left_x, LEFT_ICON, visuals.left_icon_scale),
        (right_x, RIGHT_ICON, visuals.right_icon_scale),
    ] {
        let min = i32::from(area.x);
        let max = i32::from(area.x + area.width) - 2;
        if max < min {
            continue;
        }
        let x = x.clamp(min, max) as u16;
        buf.set_string(x, row, glyph, icon_style(scale, visuals.root_opacity, theme));
    }
}

fn icon_style(scale: f64, opacity: f64, theme: &Theme) -> Style {
    if scale > PULSE_THRESHOLD {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fade(theme.icon, opacity))
    }
}

fn readout_line<'a>(app: &AppState, visuals: &SliderVisuals, theme: &Theme) -> Line<'a> {
    let volume = app.slider.volume();
    let mut spans = vec![Span::styled(
        format!("{volume:>3}"),
        Style::default()
            .fg(theme.fade(theme.text_primary, visuals.root_opacity))
            .add_modifier(Modifier::BOLD),
    )];
    if app.slider.region().is_overflowing() {
        spans.push(Span::styled(
            format!("  {} +{:.1}", app.slider.region(), app.slider.overflow()),
            theme::muted(),
        ));
    }
    Line::from(spans)
}

fn inspector_lines<'a>(app: &AppState, v: &SliderVisuals) -> Vec<Line<'a>> {
    let slider = &app.slider;
    let origin = match v.track_origin {
        TransformOrigin::Left => "left",
        TransformOrigin::Right => "right",
    };
    vec![
        row(
            "region",
            format!(
                "{}  overflow {:.2}  pointer {:.1}  {}",
                slider.region(),
                slider.overflow(),
                slider.pointer_x(),
                if slider.is_captured() { "captured" } else { "free" },
            ),
        ),
        row(
            "root",
            format!("scale {:.3}  opacity {:.3}", v.root_scale, v.root_opacity),
        ),
        row(
            "track",
            format!(
                "scale {:.3} x {:.3}  origin {origin}  height {:.1}  margin {:.1}",
                v.track_scale_x, v.track_scale_y, v.track_height, v.track_margin
            ),
        ),
        row(
            "icons",
            format!(
                "x {:.1} / {:.1}  scale {:.2} / {:.2}",
                v.left_icon_x, v.right_icon_x, v.left_icon_scale, v.right_icon_scale
            ),
        ),
        row(
            "value",
            format!("raw {:.2}  committed {}", slider.raw_value(), slider.volume()),
        ),
    ]
}

fn row<'a>(label: &str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label:>7}  "), theme::accent()),
        Span::styled(value, theme::muted()),
    ])
}
