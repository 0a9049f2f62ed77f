//! Service layer error types
//!
//! Transport failures are folded into the three kinds the UI cares about:
//! network, server and client-side validation.

use thiserror::Error;

use crate::ports::outbound::ApiError;
use dunder_domain::ValidationError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Request never reached the server or got no response
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Response could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(msg) => ServiceError::Network(msg),
            ApiError::Server { status, message } => ServiceError::Server { status, message },
            ApiError::Parse(msg) => ServiceError::Parse(msg),
            // A body we failed to build never left the client
            ApiError::Serialize(msg) => ServiceError::Network(msg),
        }
    }
}

impl ServiceError {
    pub fn is_network(&self) -> bool {
        matches!(self, ServiceError::Network(_))
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ServiceError::Server { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Server { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_api_errors_onto_service_kinds() {
        let server: ServiceError = ApiError::Server {
            status: 404,
            message: "missing".into(),
        }
        .into();
        assert!(server.is_server());
        assert!(server.is_not_found());

        let network: ServiceError = ApiError::Network("connection refused".into()).into();
        assert!(network.is_network());

        let validation: ServiceError = ValidationError::NameRequired.into();
        assert_eq!(validation.to_string(), "Character name is required");
    }
}
