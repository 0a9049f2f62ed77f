//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use `use_context` to access services without depending
//! on infrastructure implementations.
//!
//! ## Architecture Note
//!
//! The presentation layer depends on application-level services and port traits.
//! It should not depend directly on infrastructure adapter types.
use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{AuthService, CharacterService, SessionGate};
use crate::application::ApiConfig;
use crate::ports::outbound::CharacterApiPort;
use crate::state::PlatformStorageAdapter;
use crate::use_platform;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub character: Arc<CharacterService>,
    pub auth: Arc<AuthService>,
    pub config: ApiConfig,
}

impl Services {
    /// Create all services over one API port
    pub fn new(api: Arc<dyn CharacterApiPort>, config: ApiConfig) -> Self {
        Self {
            character: Arc::new(CharacterService::new(api.clone())),
            auth: Arc::new(AuthService::new(api)),
            config,
        }
    }
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<CharacterService> {
    let services = use_context::<Services>();
    services.character.clone()
}

/// Hook to access the AuthService from context
pub fn use_auth_service() -> Arc<AuthService> {
    let services = use_context::<Services>();
    services.auth.clone()
}

/// Hook to access the API configuration (image URLs are built from it)
pub fn use_api_config() -> ApiConfig {
    let services = use_context::<Services>();
    services.config.clone()
}

/// Session gate over the platform's tab-scoped storage
pub fn use_session_gate() -> SessionGate<PlatformStorageAdapter> {
    SessionGate::new(PlatformStorageAdapter::new(use_platform()))
}
