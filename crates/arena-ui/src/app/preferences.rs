//! Persistence and environment helpers for the app shell.

use gloo::storage::{LocalStorage, Storage};
use gloo::utils::document;

pub(crate) const THEME_KEY: &str = "arena.theme";
pub(crate) const AUTO_REFRESH_KEY: &str = "arena.auto_refresh";
pub(crate) const API_BASE_KEY: &str = "arena.api_base";

/// Cadence of the background status poll.
pub(crate) const POLL_INTERVAL_MS: u32 = 2_500;

/// Light/dark rendering mode, persisted across sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub(crate) const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        return match value.as_str() {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
    }
    ThemeMode::Dark
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    LocalStorage::set(THEME_KEY, theme.as_str()).ok();
}

pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(root) = document().document_element() {
        root.set_attribute("data-theme", theme.as_str()).ok();
    }
}

pub(crate) fn load_auto_refresh() -> bool {
    LocalStorage::get::<bool>(AUTO_REFRESH_KEY).unwrap_or(true)
}

pub(crate) fn persist_auto_refresh(enabled: bool) {
    LocalStorage::set(AUTO_REFRESH_KEY, enabled).ok();
}

/// Base URL override for the API, e.g. when the UI is served by a dev
/// server on another port. Empty targets the serving origin.
pub(crate) fn api_base_url() -> String {
    LocalStorage::get::<String>(API_BASE_KEY).unwrap_or_default()
}
