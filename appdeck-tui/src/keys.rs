//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    CyclePageSize,
    OpenDetail,
    CloseDetail,
    Refresh,
    OpenHelp,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),
        KeyCode::Char('s') => Some(Action::CyclePageSize),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Enter => Some(Action::OpenDetail),
        KeyCode::Esc => Some(Action::CloseDetail),
        _ => None,
    }
}
