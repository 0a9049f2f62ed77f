//! Character API Port - Object-safe HTTP boundary
//!
//! One method per remote call. Nothing here retries, caches or times out on
//! its own; each call goes to the network exactly once.

use thiserror::Error;

use dunder_domain::{
    Character, CharacterId, CharacterPayload, LoginRequest, LoginResponse, RegisterUserRequest,
};

/// Transport-level failure of a remote call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request body could not be built
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

/// Remote characters API and auth endpoints
///
/// Implemented by `infrastructure::http_client::ApiAdapter`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CharacterApiPort: Send + Sync {
    /// `GET /api/personagens`
    async fn list_characters(&self) -> Result<Vec<Character>, ApiError>;

    /// `GET /api/personagens/{id}`
    async fn get_character(&self, id: &CharacterId) -> Result<Character, ApiError>;

    /// `POST /api/personagens` (multipart)
    async fn create_character(&self, payload: &CharacterPayload) -> Result<(), ApiError>;

    /// `PUT /api/personagens/{id}` (multipart, only the parts present)
    async fn update_character(
        &self,
        id: &CharacterId,
        payload: &CharacterPayload,
    ) -> Result<(), ApiError>;

    /// `DELETE /api/personagens/{id}`
    async fn delete_character(&self, id: &CharacterId) -> Result<(), ApiError>;

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/register`
    async fn register_user(&self, request: &RegisterUserRequest) -> Result<(), ApiError>;
}
