//! Target-independent providers
//!
//! `MemoryStorageProvider` is the desktop stand-in for a browser tab's
//! sessionStorage: it lives exactly as long as the process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::{DocumentProvider, LogProvider, StorageProvider};

/// In-memory storage scoped to the running process
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.data.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.data.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.data.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Log provider using tracing
///
/// On wasm the subscriber installed by `tracing-wasm` forwards to the console.
#[derive(Clone, Default)]
pub struct TracingLogProvider;

impl LogProvider for TracingLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// Document provider that ignores page titles
#[derive(Clone, Default)]
pub struct NoopDocumentProvider;

impl DocumentProvider for NoopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is managed by Dioxus desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_map() {
        let storage = MemoryStorageProvider::new();
        let other = storage.clone();

        storage.save("isAuthenticated", "true");
        assert_eq!(other.load("isAuthenticated").as_deref(), Some("true"));

        other.remove("isAuthenticated");
        assert_eq!(storage.load("isAuthenticated"), None);
    }
}
