//! Application state and view state definitions.

use crate::api_client::ApiClient;
use crate::config::{TuiConfig, PAGE_SIZES};
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::Theme;
use appdeck_api::{AppOverview, AppSummary, GetAppOverviewResponse, GetAppsResponse, GetAppUsersResponse};
use std::time::{Duration, Instant};

/// Delay between panel mount and the start of the slide-in, so the
/// animation lands after initial layout.
pub const MOUNT_DELAY: Duration = Duration::from_millis(100);
/// Duration of the slide transition, both directions. Closing waits
/// this long before the panel actually unmounts.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// What became of a fetch completion once it reached the state layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// Response carried an outdated generation token and was dropped.
    Stale,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub api: ApiClient,
    pub inventory: InventoryViewState,
    pub detail: Option<DetailPanelState>,
    pub notifications: Vec<Notification>,
    detail_generation: u64,
}

impl App {
    pub fn new(config: TuiConfig, api: ApiClient) -> Self {
        let page_size = config.default_page_size;
        Self {
            config,
            theme: Theme::daylight(),
            api,
            inventory: InventoryViewState::new(page_size),
            detail: None,
            notifications: Vec::new(),
            detail_generation: 0,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Whether the detail panel currently owns the list-navigation
    /// keys (background scroll is suppressed while it is mounted).
    pub fn detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Mount the detail panel for an app. Returns the generation token
    /// the panel's two fetches must carry.
    pub fn open_detail(&mut self, app_id: String, now: Instant) -> u64 {
        self.detail_generation += 1;
        self.detail = Some(DetailPanelState::new(app_id, self.detail_generation, now));
        self.detail_generation
    }

    /// Start the slide-out. The panel unmounts only once the reverse
    /// transition has run its course (see `tick_detail`).
    pub fn request_close_detail(&mut self, now: Instant) {
        if let Some(detail) = &mut self.detail {
            detail.begin_close(now);
        }
    }

    /// Advance the panel animation. Returns true when a close just
    /// completed and the selection has been discarded.
    pub fn tick_detail(&mut self, now: Instant) -> bool {
        let finished = match &mut self.detail {
            Some(detail) => detail.tick(now),
            None => false,
        };
        if finished {
            self.detail = None;
        }
        finished
    }

    pub fn apply_overview(
        &mut self,
        generation: u64,
        result: Result<GetAppOverviewResponse, String>,
    ) -> LoadOutcome {
        let Some(detail) = self.detail.as_mut().filter(|d| d.generation == generation) else {
            return LoadOutcome::Stale;
        };
        match result {
            Ok(response) => {
                detail.overview = SectionState::Ready(response.app_overview);
                LoadOutcome::Applied
            }
            Err(message) => {
                detail.overview = SectionState::Failed(message);
                LoadOutcome::Failed
            }
        }
    }

    pub fn apply_users(
        &mut self,
        generation: u64,
        result: Result<GetAppUsersResponse, String>,
    ) -> LoadOutcome {
        let Some(detail) = self.detail.as_mut().filter(|d| d.generation == generation) else {
            return LoadOutcome::Stale;
        };
        match result {
            Ok(response) => {
                detail.users = SectionState::Ready(response.app_users);
                LoadOutcome::Applied
            }
            Err(message) => {
                detail.users = SectionState::Failed(message);
                LoadOutcome::Failed
            }
        }
    }

    pub fn select_next(&mut self) {
        match &mut self.detail {
            Some(detail) => detail.scroll_down(),
            None => self.inventory.select_next(),
        }
    }

    pub fn select_previous(&mut self) {
        match &mut self.detail {
            Some(detail) => detail.scroll_up(),
            None => self.inventory.select_previous(),
        }
    }
}

// ============================================================================
// INVENTORY VIEW STATE
// ============================================================================

/// Last reachable page index for a given total and page size.
pub fn last_page_index(total_count: u64, page_size: u32) -> u32 {
    if total_count == 0 {
        return 0;
    }
    (total_count.div_ceil(page_size as u64) - 1) as u32
}

/// Blank filler rows for a short trailing page, to avoid layout shift.
/// Cosmetic only.
pub fn empty_rows(page: u32, page_size: u32, total_count: u64) -> u64 {
    if total_count == 0 || page == 0 {
        return 0;
    }
    ((page as u64 + 1) * page_size as u64).saturating_sub(total_count)
}

#[derive(Debug, Clone)]
pub struct InventoryViewState {
    /// Latest successfully loaded page; replaced wholesale per fetch.
    /// None until the first load resolves.
    pub data: Option<GetAppsResponse>,
    pub page: u32,
    pub page_size: u32,
    pub cursor: Option<usize>,
    pub error: bool,
    pub loading: bool,
    pub generation: u64,
}

impl InventoryViewState {
    pub fn new(page_size: u32) -> Self {
        Self {
            data: None,
            page: 0,
            page_size,
            cursor: None,
            error: false,
            loading: false,
            generation: 0,
        }
    }

    pub fn rows(&self) -> &[AppSummary] {
        self.data.as_ref().map(|d| d.app_rows.as_slice()).unwrap_or(&[])
    }

    pub fn total_count(&self) -> u64 {
        self.data.as_ref().map(|d| d.total_count).unwrap_or(0)
    }

    pub fn last_page(&self) -> u32 {
        last_page_index(self.total_count(), self.page_size)
    }

    pub fn empty_rows(&self) -> u64 {
        empty_rows(self.page, self.page_size, self.total_count())
    }

    /// Record the page/size a new fetch targets and hand out its
    /// generation token.
    pub fn begin_load(&mut self, page: u32, page_size: u32) -> u64 {
        self.page = page;
        self.page_size = page_size;
        self.loading = true;
        self.generation += 1;
        self.generation
    }

    /// Fold a fetch completion into the state. Completions carrying an
    /// outdated generation are dropped so a slow response can never
    /// overwrite a newer page.
    pub fn apply(&mut self, generation: u64, result: Result<GetAppsResponse, String>) -> LoadOutcome {
        if generation != self.generation {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                let row_count = response.app_rows.len();
                self.data = Some(response);
                self.error = false;
                self.cursor = match row_count {
                    0 => None,
                    n => Some(self.cursor.unwrap_or(0).min(n - 1)),
                };
                LoadOutcome::Applied
            }
            Err(_) => {
                // Prior data stays in memory; the view renders only the
                // error message while the flag is set.
                self.error = true;
                LoadOutcome::Failed
            }
        }
    }

    pub fn first_page(&self) -> Option<u32> {
        (self.page > 0).then_some(0)
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.page.checked_sub(1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.page < self.last_page()).then(|| self.page + 1)
    }

    pub fn last_page_target(&self) -> Option<u32> {
        let last = self.last_page();
        (self.page < last).then_some(last)
    }

    /// Next rows-per-page option (25 <-> 50).
    pub fn cycle_page_size(&self) -> u32 {
        let index = PAGE_SIZES.iter().position(|&s| s == self.page_size).unwrap_or(0);
        PAGE_SIZES[(index + 1) % PAGE_SIZES.len()]
    }

    pub fn selected_app_id(&self) -> Option<&str> {
        let cursor = self.cursor?;
        self.rows().get(cursor).map(|row| row.app_id.as_str())
    }

    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.cursor = None;
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(index) => (index + 1) % len,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.cursor = None;
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        });
    }
}

// ============================================================================
// DETAIL PANEL STATE
// ============================================================================

/// Fetch slot for one section of the detail panel. The two sections
/// are independent; a failure in one never blocks the other.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> SectionState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            SectionState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Slide animation phase of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// Mounted but still off-screen, waiting out the mount delay.
    MountDelay { since: Instant },
    Opening { since: Instant },
    Open,
    Closing { since: Instant },
}

#[derive(Debug, Clone)]
pub struct DetailPanelState {
    pub app_id: String,
    pub overview: SectionState<AppOverview>,
    pub users: SectionState<Vec<String>>,
    pub phase: PanelPhase,
    pub user_scroll: usize,
    pub generation: u64,
}

impl DetailPanelState {
    pub fn new(app_id: String, generation: u64, now: Instant) -> Self {
        Self {
            app_id,
            overview: SectionState::Loading,
            users: SectionState::Loading,
            phase: PanelPhase::MountDelay { since: now },
            user_scroll: 0,
            generation,
        }
    }

    /// Advance the animation. Returns true exactly once, when a close
    /// transition has run for the full slide duration.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            PanelPhase::MountDelay { since } => {
                if now.duration_since(since) >= MOUNT_DELAY {
                    self.phase = PanelPhase::Opening { since: now };
                }
                false
            }
            PanelPhase::Opening { since } => {
                if now.duration_since(since) >= SLIDE_DURATION {
                    self.phase = PanelPhase::Open;
                }
                false
            }
            PanelPhase::Open => false,
            PanelPhase::Closing { since } => now.duration_since(since) >= SLIDE_DURATION,
        }
    }

    /// Fraction of the panel currently on screen, in [0, 1].
    pub fn progress(&self, now: Instant) -> f64 {
        match self.phase {
            PanelPhase::MountDelay { .. } => 0.0,
            PanelPhase::Opening { since } => {
                (now.duration_since(since).as_secs_f64() / SLIDE_DURATION.as_secs_f64()).min(1.0)
            }
            PanelPhase::Open => 1.0,
            PanelPhase::Closing { since } => {
                (1.0 - now.duration_since(since).as_secs_f64() / SLIDE_DURATION.as_secs_f64()).max(0.0)
            }
        }
    }

    pub fn begin_close(&mut self, now: Instant) {
        if !matches!(self.phase, PanelPhase::Closing { .. }) {
            self.phase = PanelPhase::Closing { since: now };
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.ready().map(Vec::len).unwrap_or(0)
    }

    pub fn scroll_down(&mut self) {
        let count = self.user_count();
        if count > 0 && self.user_scroll + 1 < count {
            self.user_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.user_scroll = self.user_scroll.saturating_sub(1);
    }
}

// ============================================================================
// TESTS
// ============================================================================
