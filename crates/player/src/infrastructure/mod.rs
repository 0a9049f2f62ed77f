//! Infrastructure adapters: the HTTP client and the platform providers

pub mod http_client;
pub mod platform;
