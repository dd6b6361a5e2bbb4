//! Slate/white theme tokens for the slider TUI.
//!
//! # Color Palette
//! - **Background**: Near-black slate (base layer)
//! - **Range**: White (filled part of the track)
//! - **Track**: Gray (unfilled part of the track)
//! - **Icon**: Off-white speaker glyphs
//! - **Accent**: Sky blue (focus, icon pulse, info status)
//! - **Warning**: Amber (clamped input, alerts)
//! - **Muted**: Slate gray (hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub range: Color,
    pub track: Color,
    pub icon: Color,
    pub accent: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(17, 17, 19),
            range: Color::Rgb(255, 255, 255),
            track: Color::Rgb(107, 114, 128),
            icon: Color::Rgb(252, 252, 252),
            accent: Color::Rgb(56, 189, 248),
            warning: Color::Rgb(251, 191, 36),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::White,
        }
    }

    /// Blend `color` toward the background by `opacity` (1.0 = unchanged).
    ///
    /// Only RGB colors can be blended; named colors are returned as-is.
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                blend(br, r, opacity),
                blend(bg, g, opacity),
                blend(bb, b, opacity),
            ),
            _ => color,
        }
    }
}

fn blend(from: u8, to: u8, t: f64) -> u8 {
    let v = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    v.round().clamp(0.0, 255.0) as u8
}

// ── Shared styles ────────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
