//! HTTP adapter for the remote characters API
//!
//! Desktop builds talk to the API through `reqwest`; wasm builds go through
//! `gloo-net` and the browser's `fetch`. Both map failures the same way:
//! a request that never got an answer is [`ApiError::Network`], a non-2xx
//! answer is [`ApiError::Server`] carrying the status and body text.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

use crate::application::ApiConfig;
use crate::ports::outbound::ApiError;

/// Concrete [`crate::ports::outbound::CharacterApiPort`] implementation
#[derive(Clone)]
pub struct ApiAdapter {
    config: ApiConfig,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Builds the error for a non-2xx answer, falling back to the status text
/// when the body is empty.
fn server_error(status: u16, body: String, status_text: &str) -> ApiError {
    let message = if body.trim().is_empty() {
        status_text.to_string()
    } else {
        body
    };
    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_uses_status_text() {
        assert_eq!(
            server_error(404, "  ".into(), "Not Found"),
            ApiError::Server {
                status: 404,
                message: "Not Found".into()
            }
        );
        assert_eq!(
            server_error(500, "boom".into(), "Internal Server Error"),
            ApiError::Server {
                status: 500,
                message: "boom".into()
            }
        );
    }
}
