//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the remote API and the browser
//! without depending on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod platform_port;

pub use api_port::{ApiError, CharacterApiPort};
#[cfg(any(test, feature = "testing"))]
pub use api_port::MockCharacterApiPort;
pub use platform::{storage_keys, DocumentProvider, LogProvider, StorageProvider};
pub use platform_port::PlatformPort;
