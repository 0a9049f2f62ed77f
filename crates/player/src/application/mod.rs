//! Application layer
//!
//! Services here depend on port traits only. The presentation layer reaches
//! them through `ui::presentation::services`.

pub mod config;
pub mod error;
pub mod services;

pub use config::ApiConfig;
pub use error::ServiceError;
