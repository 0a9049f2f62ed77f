//! Auth Service - login and user registration
//!
//! Login answers with a bare `auth` boolean. Turning that into a session is
//! the job of [`super::SessionGate`].

use std::sync::Arc;

use dunder_domain::{LoginRequest, LoginResponse, RegisterUserRequest};

use crate::application::ServiceError;
use crate::ports::outbound::CharacterApiPort;

#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn CharacterApiPort>,
}

impl AuthService {
    pub fn new(api: Arc<dyn CharacterApiPort>) -> Self {
        Self { api }
    }

    /// Check credentials against `/auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        let request = LoginRequest {
            email: email.to_string(),
            senha: password.to_string(),
        };
        match self.api.login(&request).await {
            Ok(response) => {
                tracing::info!(email, auth = response.auth, "Login answered");
                Ok(response)
            }
            Err(e) => {
                tracing::error!(email, error = %e, "Login request failed");
                Err(e.into())
            }
        }
    }

    /// Create a user account
    pub async fn register_user(
        &self,
        nome: &str,
        email: &str,
        senha: &str,
    ) -> Result<(), ServiceError> {
        let request = RegisterUserRequest {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: senha.to_string(),
        };
        self.api.register_user(&request).await.map_err(|e| {
            tracing::error!(email, error = %e, "User registration failed");
            ServiceError::from(e)
        })?;
        tracing::info!(email, "User registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockCharacterApiPort};

    #[tokio::test]
    async fn login_sends_email_and_senha() {
        let mut api = MockCharacterApiPort::new();
        api.expect_login()
            .withf(|req| req.email == "jim@dundermifflin.com" && req.senha == "beesly")
            .times(1)
            .returning(|_| Ok(LoginResponse { auth: true }));
        let service = AuthService::new(Arc::new(api));

        let response = service.login("jim@dundermifflin.com", "beesly").await.unwrap();
        assert!(response.auth);
    }

    #[tokio::test]
    async fn register_failure_is_a_server_error() {
        let mut api = MockCharacterApiPort::new();
        api.expect_register_user().times(1).returning(|_| {
            Err(ApiError::Server {
                status: 409,
                message: "exists".into(),
            })
        });
        let service = AuthService::new(Arc::new(api));

        let err = service
            .register_user("Kevin", "kevin@dundermifflin.com", "chili")
            .await
            .unwrap_err();
        assert!(err.is_server());
    }
}
