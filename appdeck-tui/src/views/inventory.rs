//! App inventory table with pagination controls.

use crate::brand::image_name;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    if app.inventory.error {
        // The error state replaces the whole table area; prior rows
        // stay in memory but are not shown.
        let message = Paragraph::new("Something went wrong! Please refresh the page...")
            .style(Style::default().fg(app.theme.error))
            .block(
                Block::default()
                    .title("App Inventory")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        f.render_widget(message, area);
        return;
    }

    if app.inventory.data.is_none() {
        // Not yet loaded; nothing beyond the container is drawn.
        let block = Block::default()
            .title("App Inventory")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));
        f.render_widget(block, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    render_table(f, app, chunks[0]);
    render_pagination(f, app, chunks[1]);
}

fn render_table(f: &mut Frame<'_>, app: &App, area: Rect) {
    let header = Row::new(vec!["Name", "Category", "Connector"]).style(
        Style::default()
            .fg(app.theme.text)
            .add_modifier(Modifier::BOLD),
    );

    let mut rows: Vec<Row> = app
        .inventory
        .rows()
        .iter()
        .map(|row| {
            let connectors = row
                .app_sources
                .iter()
                .map(|source| image_name(source))
                .collect::<Vec<_>>()
                .join("  ");
            Row::new(vec![
                format!("◉ {}", row.app_name),
                row.category.clone(),
                connectors,
            ])
            .style(Style::default().fg(app.theme.text))
        })
        .collect();

    // Filler rows keep a short trailing page from collapsing.
    for _ in 0..app.inventory.empty_rows() {
        rows.push(Row::new(vec!["", "", ""]));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("App Inventory")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .highlight_style(
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    if !app.detail_open() {
        state.select(app.inventory.cursor);
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn render_pagination(f: &mut Frame<'_>, app: &App, area: Rect) {
    let inventory = &app.inventory;
    let total = inventory.total_count();
    let range = if total == 0 {
        "0 of 0".to_string()
    } else {
        let start = inventory.page as u64 * inventory.page_size as u64 + 1;
        let end = ((inventory.page as u64 + 1) * inventory.page_size as u64).min(total);
        if start > total {
            format!("0 of {}", total)
        } else {
            format!("{}–{} of {}", start, end, total)
        }
    };

    let mut spans = vec![
        Span::styled(
            format!("Rows per page: {} [s]", inventory.page_size),
            Style::default().fg(app.theme.text_dim),
        ),
        Span::raw("   "),
        Span::styled(range, Style::default().fg(app.theme.text)),
        Span::raw("   "),
        Span::styled(
            format!("page {}/{}", inventory.page + 1, inventory.last_page() + 1),
            Style::default().fg(app.theme.text_dim),
        ),
    ];
    if inventory.loading {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("…", Style::default().fg(app.theme.text_muted)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
