//! WASM platform implementations
//!
//! Backed by `window.sessionStorage`, which the browser clears when the tab
//! closes.

use super::memory::TracingLogProvider;
use crate::ports::outbound::{DocumentProvider, StorageProvider};
use crate::state::Platform;

/// Storage provider over `window.sessionStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!("Failed to write sessionStorage key {}: {:?}", key, e);
                }
            }
            None => tracing::warn!("sessionStorage unavailable; dropping key {}", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove sessionStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// Document provider setting `document.title`
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmStorageProvider, TracingLogProvider, WasmDocumentProvider)
}
