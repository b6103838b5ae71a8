//! Persistent key/value storage for the auth state.
//!
//! - Web: `localStorage`
//! - Desktop: one JSON file per key under the platform config directory
//!   (`~/.config/ulms/` on Linux)

use serde::{de::DeserializeOwned, Serialize};

/// Serialize `value` under `key`. Failures are logged and otherwise ignored.
pub fn save<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => {
            if !write_raw(key, &json) {
                crate::log_warn!("could not persist `{key}`");
            }
        }
        Err(e) => crate::log_error!("could not serialize `{key}`: {e}"),
    }
}

/// `None` when the key is missing or holds something that no longer decodes.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = read_raw(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            crate::log_warn!("discarding stale `{key}`: {e}");
            None
        }
    }
}

pub fn remove(key: &str) {
    remove_raw(key);
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn write_raw(key: &str, value: &str) -> bool {
    local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
}

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn file_for(key: &str) -> Option<std::path::PathBuf> {
    let dir = dirs::config_dir()?.join("ulms");
    std::fs::create_dir_all(&dir).ok()?;
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(dir.join(format!("{safe_key}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(key: &str, value: &str) -> bool {
    file_for(key).is_some_and(|path| std::fs::write(path, value).is_ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw(key: &str) -> Option<String> {
    std::fs::read_to_string(file_for(key)?).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    if let Some(path) = file_for(key) {
        let _ = std::fs::remove_file(path);
    }
}
