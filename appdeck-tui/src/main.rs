//! appdeck TUI entry point.

use appdeck_api::GetAppsRequest;
use appdeck_tui::api_client::ApiClient;
use appdeck_tui::config::TuiConfig;
use appdeck_tui::error::TuiError;
use appdeck_tui::events::TuiEvent;
use appdeck_tui::keys::{map_key, Action};
use appdeck_tui::notifications::NotificationLevel;
use appdeck_tui::persistence::{self, PersistedState};
use appdeck_tui::state::{App, LoadOutcome};
use appdeck_tui::views::render_view;
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let api = ApiClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);

    spawn_input_reader(event_tx.clone());

    // Pull side of the link-state adapter: an existing selection token
    // reopens the detail panel before the first render.
    if let Ok(Some(state)) = persistence::load(&app.config.link_state_path) {
        if let Some(app_id) = state.fragment.as_deref().and_then(persistence::parse_fragment) {
            let generation = app.open_detail(app_id.clone(), Instant::now());
            spawn_detail_fetches(&app, app_id, generation, event_tx.clone());
        }
    }

    let initial_page_size = app.config.default_page_size;
    spawn_inventory_load(&mut app, 0, initial_page_size, event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        let now = Instant::now();
        terminal.draw(|f| render_view(f, &app, now))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event, &event_tx) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key) {
                return handle_action(app, action, sender);
            }
        }
        TuiEvent::Tick => {
            if app.tick_detail(Instant::now()) {
                // Close finished: push side of the adapter clears the
                // selection token.
                write_fragment(app, None);
            }
        }
        TuiEvent::InventoryLoaded { generation, result } => {
            let error = result.as_ref().err().cloned();
            if app.inventory.apply(generation, result) == LoadOutcome::Failed {
                if let Some(message) = error {
                    app.notify(NotificationLevel::Error, format!("Inventory load failed: {}", message));
                }
            }
        }
        TuiEvent::OverviewLoaded { generation, result } => {
            let error = result.as_ref().err().cloned();
            if app.apply_overview(generation, result) == LoadOutcome::Failed {
                if let Some(message) = error {
                    app.notify(NotificationLevel::Error, format!("Overview fetch failed: {}", message));
                }
            }
        }
        TuiEvent::UsersLoaded { generation, result } => {
            let error = result.as_ref().err().cloned();
            if app.apply_users(generation, result) == LoadOutcome::Failed {
                if let Some(message) = error {
                    app.notify(NotificationLevel::Error, format!("User list fetch failed: {}", message));
                }
            }
        }
        TuiEvent::Resize { .. } => {}
    }
    false
}

fn handle_action(app: &mut App, action: Action, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match action {
        Action::Quit => return true,
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::CloseDetail => app.request_close_detail(Instant::now()),
        Action::OpenHelp => app.notify(
            NotificationLevel::Info,
            "j/k move, Enter open, Esc close, h/l page, g/G first/last, s rows per page, r refresh, q quit",
        ),
        // While the panel is open it owns the keyboard; table actions
        // are suppressed (the original locks background scrolling).
        Action::OpenDetail if app.detail_open() => {}
        Action::OpenDetail => {
            if let Some(app_id) = app.inventory.selected_app_id().map(str::to_string) {
                let generation = app.open_detail(app_id.clone(), Instant::now());
                write_fragment(app, Some(persistence::format_fragment(&app_id)));
                spawn_detail_fetches(app, app_id, generation, sender.clone());
            }
        }
        Action::FirstPage | Action::PrevPage | Action::NextPage | Action::LastPage
            if app.detail_open() => {}
        Action::FirstPage => {
            if let Some(page) = app.inventory.first_page() {
                let size = app.inventory.page_size;
                spawn_inventory_load(app, page, size, sender.clone());
            }
        }
        Action::PrevPage => {
            if let Some(page) = app.inventory.prev_page() {
                let size = app.inventory.page_size;
                spawn_inventory_load(app, page, size, sender.clone());
            }
        }
        Action::NextPage => {
            if let Some(page) = app.inventory.next_page() {
                let size = app.inventory.page_size;
                spawn_inventory_load(app, page, size, sender.clone());
            }
        }
        Action::LastPage => {
            if let Some(page) = app.inventory.last_page_target() {
                let size = app.inventory.page_size;
                spawn_inventory_load(app, page, size, sender.clone());
            }
        }
        Action::CyclePageSize if app.detail_open() => {}
        Action::CyclePageSize => {
            // Page size change always restarts from the first page.
            let size = app.inventory.cycle_page_size();
            spawn_inventory_load(app, 0, size, sender.clone());
        }
        Action::Refresh if app.detail_open() => {}
        Action::Refresh => {
            let page = app.inventory.page;
            let size = app.inventory.page_size;
            spawn_inventory_load(app, page, size, sender.clone());
        }
    }
    false
}

fn spawn_inventory_load(app: &mut App, page: u32, page_size: u32, sender: mpsc::Sender<TuiEvent>) {
    let generation = app.inventory.begin_load(page, page_size);
    let client = app.api.clone();
    tokio::spawn(async move {
        let params = GetAppsRequest {
            page_number: page,
            page_size,
        };
        let result = client.get_apps(&params).await.map_err(|e| e.to_string());
        let _ = sender
            .send(TuiEvent::InventoryLoaded { generation, result })
            .await;
    });
}

fn spawn_detail_fetches(app: &App, app_id: String, generation: u64, sender: mpsc::Sender<TuiEvent>) {
    let client = app.api.clone();
    let id = app_id.clone();
    let tx = sender.clone();
    tokio::spawn(async move {
        let result = client.get_app_overview(&id).await.map_err(|e| e.to_string());
        let _ = tx.send(TuiEvent::OverviewLoaded { generation, result }).await;
    });

    let client = app.api.clone();
    tokio::spawn(async move {
        let result = client
            .get_app_users(&app_id)
            .await
            .map_err(|e| e.to_string());
        let _ = sender
            .send(TuiEvent::UsersLoaded { generation, result })
            .await;
    });
}

fn write_fragment(app: &App, fragment: Option<String>) {
    let state = PersistedState { fragment };
    let _ = persistence::save(&app.config.link_state_path, &state);
}
