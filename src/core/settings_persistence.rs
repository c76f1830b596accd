//! Settings persistence system
//!
//! Reads and writes [`GameSettings`] as JSON in the platform configuration directory.
//!
//! # File Location
//!
//! `settings.json` under the `ProjectDirs` config dir, e.g.
//! `~/.config/chess3d/settings.json` on Linux. When no config dir can be resolved the
//! file is read from and written to the working directory.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings; the reason is kept in [`SettingsStore`]
//!   and logged once logging is up
//! - Save failures are logged but don't interrupt gameplay
//!
//! # Command-line overrides
//!
//! Settings are loaded in `main` before the app is built, because the log filter has to
//! be known when `LogPlugin` is added. Command-line overrides are applied on top of the
//! loaded copy. [`SettingsStore`] keeps what is on disk separately so that a runtime
//! change (the hints toggle) never writes those overrides back to the file.

use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{CoreError, CoreResult};
use super::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// How the settings file was found at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Missing,
    /// Unreadable or invalid, defaults used instead
    Fallback(String),
}

/// Backing file plus its last known contents
#[derive(Resource, Debug, Clone)]
pub struct SettingsStore {
    pub path: PathBuf,
    pub on_disk: GameSettings,
    pub outcome: LoadOutcome,
}

impl SettingsStore {
    /// Load from the platform config dir
    pub fn load() -> Self {
        Self::load_from(settings_path())
    }

    /// Load from an explicit path, falling back to defaults
    pub fn load_from(path: PathBuf) -> Self {
        let (on_disk, outcome) = match read_settings(&path) {
            Ok(Some(settings)) => (settings, LoadOutcome::Loaded),
            Ok(None) => (GameSettings::default(), LoadOutcome::Missing),
            Err(e) => (GameSettings::default(), LoadOutcome::Fallback(e.to_string())),
        };
        Self {
            path,
            on_disk,
            outcome,
        }
    }

    /// Copy runtime-editable fields from the live settings
    ///
    /// Returns whether anything on disk needs rewriting.
    pub fn absorb_runtime_changes(&mut self, live: &GameSettings) -> bool {
        if self.on_disk.show_hints == live.show_hints {
            return false;
        }
        self.on_disk.show_hints = live.show_hints;
        true
    }

    pub fn save(&self) -> CoreResult<()> {
        write_settings(&self.path, &self.on_disk)
    }
}

/// Resolve `settings.json` in the user's configuration directory
///
/// Falls back to a local `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    match config_dir() {
        Ok(dir) => dir.join(SETTINGS_FILENAME),
        Err(_) => PathBuf::from(SETTINGS_FILENAME),
    }
}

fn config_dir() -> CoreResult<PathBuf> {
    ProjectDirs::from("org", "chess3d", "chess3d")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(CoreError::NoConfigDir)
}

/// `Ok(None)` when the file does not exist
pub fn read_settings(path: &Path) -> CoreResult<Option<GameSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    Ok(Some(settings))
}

pub fn write_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Log where settings came from
///
/// Runs in `Startup`: the file is read before `LogPlugin` exists.
pub fn report_settings_source(store: Res<SettingsStore>) {
    match &store.outcome {
        LoadOutcome::Loaded => info!("[SETTINGS] Loaded settings from {:?}", store.path),
        LoadOutcome::Missing => info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            store.path
        ),
        LoadOutcome::Fallback(reason) => warn!(
            "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
            store.path, reason
        ),
    }
}

/// Save settings to file when a runtime-editable field changes
pub fn save_settings_system(settings: Res<GameSettings>, mut store: ResMut<SettingsStore>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }
    if !store.absorb_runtime_changes(&settings) {
        return;
    }

    match store.save() {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", store.path),
        Err(e) => error!(
            "[SETTINGS] Failed to write settings file at {:?}: {}",
            store.path, e
        ),
    }
}
