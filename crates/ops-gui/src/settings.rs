//! Application settings persisted as TOML in the platform config dir.
//!
//! Only appearance preferences live here; viewer interaction state is
//! deliberately never persisted.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Settings {
    /// Load from disk, silently defaulting when the file is absent or
    /// unreadable.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!("Malformed settings file {}: {err}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk. Failures are logged, never surfaced.
    pub fn save(&self) {
        let Some(path) = settings_path() else {
            return;
        };
        let Ok(content) = toml::to_string_pretty(self) else {
            return;
        };
        if let Some(parent) = path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            tracing::warn!("Could not create settings dir {}: {err}", parent.display());
            return;
        }
        if let Err(err) = fs::write(&path, content) {
            tracing::warn!("Could not write settings to {}: {err}", path.display());
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "Line Ops Studio")?;
    Some(proj_dirs.config_dir().join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_toml() {
        let settings = Settings {
            theme_mode: ThemeMode::Dark,
        };
        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_default() {
        let parsed: Settings = toml::from_str("").unwrap();
        assert_eq!(parsed.theme_mode, ThemeMode::Light);
    }
}
