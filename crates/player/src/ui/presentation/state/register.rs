//! Register-user modal state

use crate::application::ServiceError;

pub const MSG_REGISTER_FAILED: &str = "Erro ao cadastrar usuário. Tente novamente.";
pub const MSG_REGISTER_SUCCESS: &str = "Usuário cadastrado com sucesso!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
    error: Option<&'static str>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Returns true on success; the modal then closes.
    pub fn apply_result(&mut self, result: Result<(), ServiceError>) -> bool {
        match result {
            Ok(()) => {
                *self = Self::new();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Registration failed");
                self.error = Some(MSG_REGISTER_FAILED);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_input_and_shows_generic_message() {
        let mut form = RegisterForm::new();
        form.nome = "Kevin".into();
        let result = Err(ServiceError::Server {
            status: 400,
            message: "bad".into(),
        });
        assert!(!form.apply_result(result));
        assert_eq!(form.error(), Some(MSG_REGISTER_FAILED));
        assert_eq!(form.nome, "Kevin");

        assert!(form.apply_result(Ok(())));
        assert_eq!(form, RegisterForm::new());
    }
}
