//! Persistence helpers for console settings.

use crate::features::settings::form::{ConsoleSettings, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_MS};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

pub(crate) const API_BASE_URL_KEY: &str = "astral.api_base_url";
pub(crate) const TIMEOUT_MS_KEY: &str = "astral.timeout_ms";
pub(crate) const DEBUG_KEY: &str = "astral.debug";

pub(crate) fn load_settings() -> ConsoleSettings {
    let api_base_url = LocalStorage::get::<String>(API_BASE_URL_KEY)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let timeout_ms = LocalStorage::get::<u32>(TIMEOUT_MS_KEY)
        .ok()
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    let debug = LocalStorage::get::<bool>(DEBUG_KEY).unwrap_or(false);
    ConsoleSettings {
        api_base_url,
        timeout_ms,
        debug,
    }
}

pub(crate) fn persist_settings(settings: &ConsoleSettings) {
    set_storage(API_BASE_URL_KEY, &settings.api_base_url);
    set_storage(TIMEOUT_MS_KEY, settings.timeout_ms);
    set_storage(DEBUG_KEY, settings.debug);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::error!("storage operation failed", "set", key, err.to_string());
    }
}
