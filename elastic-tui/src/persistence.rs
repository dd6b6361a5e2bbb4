//! App state persistence: JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use elastic_core::Volume;

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub volume: Volume,
    pub show_inspector: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            volume: Volume::default(),
            show_inspector: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        volume: app.slider.volume(),
        show_inspector: app.show_inspector,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.slider.set_volume(state.volume);
    app.show_inspector = state.show_inspector;
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use elastic_core::SliderConfig;

    use super::*;

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let state = PersistedState {
            volume: Volume::try_from(73u8).unwrap(),
            show_inspector: true,
        };
        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.volume.get(), 73);
        assert!(loaded.show_inspector);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.volume, Volume::default());
        assert!(!loaded.show_inspector);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.volume, Volume::default());
    }

    #[test]
    fn out_of_range_volume_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{ "volume": 250 }"#).unwrap();

        assert_eq!(load(&path).volume, Volume::default());
    }

    #[test]
    fn extract_and_apply() {
        let mut app = AppState::new(SliderConfig::default(), 8.0, PathBuf::from("state.json"));
        apply(
            &mut app,
            PersistedState {
                volume: Volume::FULL,
                show_inspector: true,
            },
        );
        assert_eq!(app.slider.volume(), Volume::FULL);

        let state = extract(&app);
        assert_eq!(state.volume, Volume::FULL);
        assert!(state.show_inspector);
    }
}
