//! Application services
//!
//! This module contains application services that implement use cases
//! for the fan site. Services depend on port traits, not concrete
//! infrastructure implementations.

pub mod auth_service;
pub mod character_service;
pub mod session_gate;

pub use auth_service::AuthService;
pub use character_service::{CharacterService, Submission};
pub use session_gate::{GuardDecision, GuardTarget, SessionGate};
