//! Event types for the TUI event loop.
//!
//! Fetches run in spawned tasks and report back through these events.
//! Each completion carries the generation token its request was issued
//! with; stale completions are dropped by the state layer.

use appdeck_api::{GetAppOverviewResponse, GetAppUsersResponse, GetAppsResponse};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    InventoryLoaded {
        generation: u64,
        result: Result<GetAppsResponse, String>,
    },
    OverviewLoaded {
        generation: u64,
        result: Result<GetAppOverviewResponse, String>,
    },
    UsersLoaded {
        generation: u64,
        result: Result<GetAppUsersResponse, String>,
    },
}
