//! Top-level UI layout: bordered slider panel with status bar.

pub mod help;
pub mod slider;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, SliderLayout};
use crate::theme;

/// Draw the entire UI and return where the slider landed this frame.
pub fn draw(f: &mut Frame, app: &AppState) -> Option<SliderLayout> {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    let active = app.overlay == Overlay::None;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(" Elastic Volume ")
        .title_style(theme::panel_title(active));
    let inner = block.inner(main_area);
    f.render_widget(block, main_area);

    let placed = slider::render(f, inner, app);

    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Help {
        help::render(f, centered_rect(60, 70, main_area));
    }

    placed
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
