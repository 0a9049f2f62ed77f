//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` factory in platform/desktop.rs or platform/wasm.rs
//! - Injected into Dioxus context by `main.rs` as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use crate::ports::outbound::{DocumentProvider, LogProvider, PlatformPort, StorageProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    storage: Arc<dyn StorageProviderDyn>,
    log: Arc<dyn LogProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait LogProviderDyn: Send + Sync {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: LogProvider + Send + Sync> LogProviderDyn for T {
    fn info(&self, msg: &str) {
        LogProvider::info(self, msg)
    }
    fn warn(&self, msg: &str) {
        LogProvider::warn(self, msg)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<S, L, D>(storage: S, log: L, document: D) -> Self
    where
        S: StorageProvider + Send + Sync,
        L: LogProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            storage: Arc::new(storage),
            log: Arc::new(log),
            document: Arc::new(document),
        }
    }
}

impl PlatformPort for Platform {
    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value);
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key);
    }

    fn log_info(&self, msg: &str) {
        self.log.info(msg);
    }

    fn log_warn(&self, msg: &str) {
        self.log.warn(msg);
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title);
    }
}

/// Adapts an injected `PlatformPort` back into a `StorageProvider`
///
/// Lets generic services such as `SessionGate<S>` run against whatever
/// platform the composition root provided.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Arc<dyn PlatformPort>,
}

impl PlatformStorageAdapter {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value);
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key);
    }
}
