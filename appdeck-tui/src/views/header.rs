//! Top navigation bar: static menu entries plus the account slot.

use crate::nav::{ACCOUNT_NAME, MENU};
use crate::state::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(inner);

    let mut spans = vec![Span::styled(
        "appdeck",
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    )];
    for entry in MENU {
        spans.push(Span::styled("  |  ", Style::default().fg(app.theme.text_muted)));
        spans.push(Span::styled(entry.name, Style::default().fg(app.theme.text)));
        if !entry.submenu.is_empty() {
            spans.push(Span::styled(" ▾", Style::default().fg(app.theme.text_dim)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    let account = app
        .config
        .account_name
        .as_deref()
        .unwrap_or(ACCOUNT_NAME);
    let account_line = Line::from(vec![
        Span::styled("● ", Style::default().fg(app.theme.primary)),
        Span::styled(account, Style::default().fg(app.theme.text_dim)),
    ]);
    f.render_widget(
        Paragraph::new(account_line).alignment(Alignment::Right),
        columns[1],
    );
}
