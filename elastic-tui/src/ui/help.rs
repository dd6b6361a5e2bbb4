//! Help overlay: keyboard and mouse reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Keys");
    key(&mut lines, "← / → / h / l", "Volume down / up by 1");
    key(&mut lines, "PgDn / PgUp", "Volume down / up by 10");
    key(&mut lines, "Home / End", "Mute / full volume");
    key(&mut lines, "m", "Toggle mute");
    key(&mut lines, "d", "Toggle the binding inspector");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Esc", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Mouse");
    key(&mut lines, "Press on track", "Jump to that volume and start dragging");
    key(&mut lines, "Drag past an end", "Stretch the track; the icon follows");
    key(&mut lines, "Release", "Track springs back into place");
    key(&mut lines, "Hover", "Grow the slider");
    key(&mut lines, "Wheel", "Volume down / up by 1");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Help ")
        .title_style(theme::panel_title(true));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>18}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
