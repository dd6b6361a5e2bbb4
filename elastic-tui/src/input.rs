//! Input dispatch: overlays first, then global keys and mouse gestures.
//!
//! Mouse columns are converted to layout units with
//! [`AppState::column_to_x`] before they reach the slider model.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::debug;

use elastic_core::Volume;

use crate::app::{AppState, Overlay};

/// Keyboard step for arrows and `h`/`l`.
const FINE_STEP: i32 = 1;
/// Keyboard step for PageUp / PageDown.
const COARSE_STEP: i32 = 10;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.overlay == Overlay::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.overlay = Overlay::None;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('d') => {
            app.show_inspector = !app.show_inspector;
        }
        KeyCode::Left | KeyCode::Down | KeyCode::Char('h') | KeyCode::Char('j') => {
            step(app, -FINE_STEP)
        }
        KeyCode::Right | KeyCode::Up | KeyCode::Char('l') | KeyCode::Char('k') => {
            step(app, FINE_STEP)
        }
        KeyCode::PageDown => step(app, -COARSE_STEP),
        KeyCode::PageUp => step(app, COARSE_STEP),
        KeyCode::Home => set(app, Volume::MUTED),
        KeyCode::End => set(app, Volume::FULL),
        KeyCode::Char('m') => {
            let target = if app.slider.volume().is_muted() {
                Volume::default()
            } else {
                Volume::MUTED
            };
            set(app, target);
        }
        _ => {}
    }
}

fn step(app: &mut AppState, delta: i32) {
    let before = app.slider.volume();
    app.slider.step_volume(delta);
    let after = app.slider.volume();
    if after == before {
        app.set_warning(format!("Volume already at {after}"));
    } else {
        app.set_status(format!("Volume {after}"));
    }
}

fn set(app: &mut AppState, volume: Volume) {
    app.slider.set_volume(volume);
    app.set_status(format!("Volume {}", app.slider.volume()));
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    // A release always ends the drag, even one that an overlay interrupted.
    if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
        release(app);
    }
    if app.overlay != Overlay::None {
        return;
    }
    let Some(layout) = app.layout else {
        return;
    };
    let position = Position::new(mouse.column, mouse.row);
    let x = app.column_to_x(mouse.column);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.track.contains(position) && app.slider.pointer_down(x) {
                debug!(column = mouse.column, x, "drag started");
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.slider.pointer_move(x, true);
        }
        MouseEventKind::Moved => {
            app.slider.pointer_move(x, false);
        }
        MouseEventKind::ScrollUp if layout.root.contains(position) => step(app, FINE_STEP),
        MouseEventKind::ScrollDown if layout.root.contains(position) => step(app, -FINE_STEP),
        _ => {}
    }

    // Hover follows the pointer over the whole widget, icons included.
    if layout.root.contains(position) {
        app.slider.hover_start();
    } else if !app.slider.is_captured() {
        app.slider.hover_end();
    }
}

fn release(app: &mut AppState) {
    let was_captured = app.slider.is_captured();
    app.slider.lost_pointer_capture();
    if was_captured {
        app.set_status(format!("Volume {}", app.slider.volume()));
    }
}
