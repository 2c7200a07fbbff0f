//! User list row.
//!
//! Given a display name, renders an avatar glyph + label pair; without
//! one, the fixed placeholder label (the upstream list opens with such
//! a header row). Pure rendering, no state.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
};

const PLACEHOLDER: &str = "Username";
const AVATAR: &str = "●";

pub fn user_row<'a>(name: Option<&'a str>, avatar_style: Style, text_style: Style) -> ListItem<'a> {
    match name {
        Some(name) => ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", AVATAR), avatar_style),
            Span::styled(name.to_string(), text_style),
        ])),
        None => ListItem::new(Line::from(Span::styled(PLACEHOLDER, text_style))),
    }
}
