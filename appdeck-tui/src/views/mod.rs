//! View rendering dispatch.

pub mod detail;
pub mod header;
pub mod inventory;

use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn render_view(f: &mut Frame<'_>, app: &App, now: Instant) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    header::render(f, app, layout[0]);
    inventory::render(f, app, layout[1]);

    // The panel overlays the table's right half; rendered last so it
    // sits on top.
    if let Some(panel) = &app.detail {
        detail::render(f, app, panel, layout[1], now);
    }

    render_footer(f, app, layout[2]);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let help = if app.detail_open() {
        "j/k scroll users • Esc close • q quit"
    } else {
        "j/k move • Enter open • h/l page • g/G first/last • s rows per page • r refresh • q quit"
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(notification_color(&note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
