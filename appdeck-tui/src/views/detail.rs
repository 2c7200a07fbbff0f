//! Slide-in detail panel: app overview plus user list.

use crate::brand::image_name;
use crate::state::{App, DetailPanelState, SectionState};
use crate::widgets::{user_row, SummaryCard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListState, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn render(f: &mut Frame<'_>, app: &App, panel: &DetailPanelState, area: Rect, now: Instant) {
    // Panel slides in from the right edge; width tracks the animation.
    let full_width = area.width / 2;
    let width = (full_width as f64 * panel.progress(now)).round() as u16;
    if width == 0 {
        return;
    }
    let panel_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    };

    f.render_widget(Clear, panel_area);
    let block = Block::default()
        .title("App overview")
        .title_style(
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focus));
    let inner = block.inner(panel_area);
    f.render_widget(block, panel_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(inner);

    // Sections render independently: each appears only once its own
    // fetch has resolved, a failed one stays absent.
    if let Some(overview) = panel.overview.ready() {
        let identity = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(app.theme.primary)),
            Span::styled(&overview.app_name, Style::default().fg(app.theme.text_dim)),
        ]);
        f.render_widget(Paragraph::new(identity), chunks[0]);

        let users_value = match &panel.users {
            SectionState::Ready(users) => users.len().to_string(),
            _ => "—".to_string(),
        };
        let connectors = overview
            .app_sources
            .iter()
            .map(|source| image_name(source))
            .collect::<Vec<_>>()
            .join("  ");
        let card = SummaryCard {
            title: "Summary",
            fields: vec![
                ("App name", overview.app_name.clone()),
                ("Category", overview.category.clone()),
                ("Users", users_value),
                ("Connector", connectors),
            ],
            label_style: Style::default().fg(app.theme.primary),
            border_style: Style::default().fg(app.theme.border_focus),
        };
        card.render(f, chunks[1]);
    } else if matches!(panel.overview, SectionState::Failed(_)) {
        let message = Paragraph::new("Overview unavailable")
            .style(Style::default().fg(app.theme.error));
        f.render_widget(message, chunks[0]);
    }

    match &panel.users {
        SectionState::Ready(users) if !users.is_empty() => {
            render_users(f, app, panel, users, chunks[2]);
        }
        SectionState::Failed(_) => {
            let message = Paragraph::new("User list unavailable")
                .style(Style::default().fg(app.theme.error));
            f.render_widget(message, chunks[2]);
        }
        _ => {}
    }
}

fn render_users(
    f: &mut Frame<'_>,
    app: &App,
    panel: &DetailPanelState,
    users: &[String],
    area: Rect,
) {
    let avatar_style = Style::default().fg(app.theme.primary);
    let text_style = Style::default().fg(app.theme.text);

    // Header placeholder row first, then one row per user.
    let mut items = vec![user_row(
        None,
        avatar_style,
        Style::default()
            .fg(app.theme.text_dim)
            .add_modifier(Modifier::BOLD),
    )];
    items.extend(users.iter().map(|name| user_row(Some(name), avatar_style, text_style)));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent)),
        )
        .highlight_style(Style::default().fg(app.theme.primary));

    let mut state = ListState::default();
    // Offset by one for the placeholder header row.
    state.select(Some(panel.user_scroll + 1));
    f.render_stateful_widget(list, area, &mut state);
}
