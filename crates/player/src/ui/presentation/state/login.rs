//! Login form state and its user-facing messages

use dunder_domain::{LoginResponse, ValidationError};

use crate::application::ServiceError;

pub const MSG_MISSING_CREDENTIALS: &str = "Por favor, insira o login e a senha.";
pub const MSG_WRONG_CREDENTIALS: &str = "Login ou senha incorretos.";
pub const MSG_LOGIN_FAILED: &str = "Erro ao autenticar. Tente novamente.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    error: Option<&'static str>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Checks both fields are filled before any request goes out.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some(MSG_MISSING_CREDENTIALS);
            return Err(ValidationError::MissingCredentials);
        }
        self.error = None;
        Ok(())
    }

    /// Returns true when the server accepted the credentials.
    pub fn apply_result(&mut self, result: Result<LoginResponse, ServiceError>) -> bool {
        match result {
            Ok(LoginResponse { auth: true }) => {
                self.error = None;
                true
            }
            Ok(LoginResponse { auth: false }) => {
                self.error = Some(MSG_WRONG_CREDENTIALS);
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                self.error = Some(MSG_LOGIN_FAILED);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::services::{AuthService, GuardDecision, GuardTarget, SessionGate};
    use crate::infrastructure::platform::MemoryStorageProvider;
    use crate::ports::outbound::{ApiError, MockCharacterApiPort};

    #[test]
    fn empty_fields_are_refused_locally() {
        let mut form = LoginForm::new();
        form.email = "michael@dundermifflin.com".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingCredentials));
        assert_eq!(form.error(), Some(MSG_MISSING_CREDENTIALS));
    }

    #[test]
    fn maps_outcomes_to_messages() {
        let mut form = LoginForm::new();
        assert!(!form.apply_result(Ok(LoginResponse { auth: false })));
        assert_eq!(form.error(), Some(MSG_WRONG_CREDENTIALS));

        assert!(!form.apply_result(Err(ApiError::Network("offline".into()).into())));
        assert_eq!(form.error(), Some(MSG_LOGIN_FAILED));
    }

    #[tokio::test]
    async fn login_unlocks_cadastro_without_redirect_loop() {
        let mut api = MockCharacterApiPort::new();
        api.expect_login()
            .times(1)
            .returning(|_| Ok(LoginResponse { auth: true }));
        let auth = AuthService::new(Arc::new(api));
        let gate = SessionGate::new(MemoryStorageProvider::new());

        assert_eq!(
            gate.guard_protected(),
            GuardDecision::Redirect(GuardTarget::Login)
        );

        let mut form = LoginForm::new();
        form.email = "michael@dundermifflin.com".into();
        form.password = "worldsbestboss".into();
        form.validate().unwrap();
        let result = auth.login(&form.email, &form.password).await;
        if form.apply_result(result) {
            gate.set_authenticated(true);
        }

        assert_eq!(gate.guard_protected(), GuardDecision::Render);
        assert_eq!(
            gate.guard_login_page(),
            GuardDecision::Redirect(GuardTarget::Cadastro)
        );
    }
}
