//! Link-state persistence for the current selection.
//!
//! The original front-end mirrored the selected app into the URL
//! fragment (`#appId-<id>`) so a detail view was shareable and
//! survived reload. The TUI keeps the same token in a small JSON file:
//! written when a selection is made, cleared when the panel closes,
//! and read once at startup to restore the panel. Nothing else is
//! persisted.

use serde::{Deserialize, Serialize};
use std::path::Path;

const FRAGMENT_PREFIX: &str = "appId-";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    /// Selection token of shape `appId-<id>`, or None when no app is
    /// selected.
    pub fragment: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Build the selection token for an app id.
pub fn format_fragment(app_id: &str) -> String {
    format!("{}{}", FRAGMENT_PREFIX, app_id)
}

/// Extract the app id from a selection token. Malformed tokens yield
/// None rather than an error; they simply mean no selection.
pub fn parse_fragment(fragment: &str) -> Option<String> {
    let id = fragment.strip_prefix(FRAGMENT_PREFIX)?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

pub fn load(path: &Path) -> Result<Option<PersistedState>, PersistenceError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let state = serde_json::from_str::<PersistedState>(&contents)?;
    Ok(Some(state))
}

pub fn save(path: &Path, state: &PersistedState) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(state)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_round_trips() {
        let fragment = format_fragment("slack.com");
        assert_eq!(fragment, "appId-slack.com");
        assert_eq!(parse_fragment(&fragment), Some("slack.com".to_string()));
    }

    #[test]
    fn numeric_ids_round_trip() {
        assert_eq!(parse_fragment(&format_fragment("42")), Some("42".to_string()));
    }

    #[test]
    fn malformed_fragments_mean_no_selection() {
        assert_eq!(parse_fragment("something-else"), None);
        assert_eq!(parse_fragment("appId-"), None);
        assert_eq!(parse_fragment(""), None);
    }

    #[test]
    fn save_and_load_preserve_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("link-state.json");

        let state = PersistedState {
            fragment: Some(format_fragment("notion.so")),
        };
        save(&path, &state).unwrap();

        let loaded = load(&path).unwrap().unwrap();
        assert_eq!(loaded.fragment.as_deref(), Some("appId-notion.so"));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json")).unwrap().is_none());
    }
}
