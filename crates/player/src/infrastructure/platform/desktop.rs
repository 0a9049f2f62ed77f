//! Desktop platform implementations
//!
//! A desktop window plays the role of a single browser tab, so the session
//! flag is kept in memory and disappears when the window closes.

use super::memory::{MemoryStorageProvider, NoopDocumentProvider, TracingLogProvider};
use crate::state::Platform;

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        MemoryStorageProvider::new(),
        TracingLogProvider,
        NoopDocumentProvider,
    )
}
