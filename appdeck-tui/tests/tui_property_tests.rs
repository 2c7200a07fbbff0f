use appdeck_tui::brand::image_name;
use appdeck_tui::config::{TuiConfig, PAGE_SIZES};
use appdeck_tui::keys::{map_key, Action};
use appdeck_tui::persistence::{format_fragment, parse_fragment};
use appdeck_tui::state::{empty_rows, last_page_index, InventoryViewState, LoadOutcome};
use appdeck_api::{AppSummary, GetAppsResponse};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "http://localhost:4000".to_string(),
        default_page_size: 25,
        tick_interval_ms: 50,
        link_state_path: "tmp/appdeck-link.json".into(),
        account_name: None,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn page_of(row_count: usize, total_count: u64) -> GetAppsResponse {
    GetAppsResponse {
        app_rows: (0..row_count)
            .map(|i| AppSummary {
                app_id: format!("app-{i}.com"),
                app_name: format!("App {i}"),
                app_sources: vec!["Okta".to_string()],
                category: "Collaboration".to_string(),
            })
            .collect(),
        total_count,
    }
}

// ============================================================================
// Config validation
// ============================================================================

#[test]
fn config_accepts_both_page_sizes() {
    for size in PAGE_SIZES {
        let mut config = base_config();
        config.default_page_size = size;
        assert!(config.validate().is_ok());
    }
}

#[test]
fn config_rejects_unsupported_page_size() {
    let mut config = base_config();
    config.default_page_size = 10;
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_empty_base_url() {
    let mut config = base_config();
    config.api_base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_tick_interval() {
    let mut config = base_config();
    config.tick_interval_ms = 0;
    assert!(config.validate().is_err());
}

// ============================================================================
// Keybindings
// ============================================================================

#[test]
fn quit_bindings() {
    assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
    let ctrl_c = KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    };
    assert_eq!(map_key(ctrl_c), Some(Action::Quit));
}

#[test]
fn detail_bindings() {
    assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::OpenDetail));
    assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::CloseDetail));
}

#[test]
fn paging_bindings() {
    assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::PrevPage));
    assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::NextPage));
    assert_eq!(map_key(key(KeyCode::Char('g'))), Some(Action::FirstPage));
    assert_eq!(map_key(key(KeyCode::Char('G'))), Some(Action::LastPage));
    assert_eq!(map_key(key(KeyCode::Char('s'))), Some(Action::CyclePageSize));
}

// ============================================================================
// Connector image names
// ============================================================================

#[test]
fn image_name_anchors() {
    assert_eq!(image_name("Okta"), "okta.com");
    assert_eq!(image_name("APP_SOURCE_MSFT"), "microsoft.com");
    assert_eq!(image_name("app_source_google"), "google.com");
}

proptest! {
    #[test]
    fn image_name_strips_prefix_and_lowercases(body in "[a-ln-z]{1,12}", prefixed in proptest::bool::ANY) {
        let raw = if prefixed {
            format!("APP_SOURCE_{}", body.to_uppercase())
        } else {
            body.to_uppercase()
        };
        let name = image_name(&raw);
        prop_assert!(name.ends_with(".com"));
        prop_assert_eq!(name, format!("{body}.com"));
    }

    // ========================================================================
    // Selection tokens
    // ========================================================================

    #[test]
    fn fragment_round_trip(id in "[a-z0-9.-]{1,32}") {
        let fragment = format_fragment(&id);
        prop_assert_eq!(parse_fragment(&fragment), Some(id));
    }

    // ========================================================================
    // Page math
    // ========================================================================

    #[test]
    fn last_page_matches_ceil_division(total in 0u64..10_000, size_index in 0usize..PAGE_SIZES.len()) {
        let size = PAGE_SIZES[size_index];
        let expected = if total == 0 {
            0
        } else {
            ((total + size as u64 - 1) / size as u64 - 1) as u32
        };
        prop_assert_eq!(last_page_index(total, size), expected);
    }

    #[test]
    fn empty_rows_complete_the_trailing_page(total in 1u64..10_000, size_index in 0usize..PAGE_SIZES.len()) {
        let size = PAGE_SIZES[size_index];
        let last = last_page_index(total, size);
        let rows_on_last = total - last as u64 * size as u64;
        let fillers = empty_rows(last, size, total);
        if last == 0 {
            prop_assert_eq!(fillers, 0);
        } else {
            prop_assert_eq!(rows_on_last + fillers, size as u64);
        }
    }

    #[test]
    fn last_page_navigation_lands_on_last_page(total in 1u64..10_000, size_index in 0usize..PAGE_SIZES.len()) {
        let size = PAGE_SIZES[size_index];
        let mut state = InventoryViewState::new(size);
        let generation = state.begin_load(0, size);
        state.apply(generation, Ok(page_of(1, total)));

        match state.last_page_target() {
            Some(target) => {
                prop_assert_eq!(target, last_page_index(total, size));
                let generation = state.begin_load(target, size);
                state.apply(generation, Ok(page_of(1, total)));
                prop_assert_eq!(state.next_page(), None);
                prop_assert_eq!(state.last_page_target(), None);
            }
            None => prop_assert_eq!(state.page, last_page_index(total, size)),
        }
    }

    #[test]
    fn stale_completions_never_overwrite_newer_ones(
        old_total in 1u64..1000,
        new_total in 1u64..1000,
    ) {
        let mut state = InventoryViewState::new(25);
        let old = state.begin_load(0, 25);
        let latest = state.begin_load(1, 25);

        prop_assert_eq!(
            state.apply(latest, Ok(page_of(2, new_total))),
            LoadOutcome::Applied
        );
        prop_assert_eq!(
            state.apply(old, Ok(page_of(5, old_total))),
            LoadOutcome::Stale
        );
        prop_assert_eq!(state.total_count(), new_total);
        prop_assert_eq!(state.rows().len(), 2);
    }
}

// ============================================================================
// Page size changes
// ============================================================================

#[test]
fn page_size_change_restarts_from_first_page() {
    let mut state = InventoryViewState::new(25);
    let generation = state.begin_load(3, 25);
    state.apply(generation, Ok(page_of(25, 163)));

    let new_size = state.cycle_page_size();
    assert_eq!(new_size, 50);

    let generation = state.begin_load(0, new_size);
    assert_eq!(state.page, 0);
    assert_eq!(state.page_size, 50);
    state.apply(generation, Ok(page_of(50, 163)));
    assert_eq!(state.last_page(), 3);
}
