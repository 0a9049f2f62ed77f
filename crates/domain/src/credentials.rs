//! Auth endpoint bodies
//!
//! `/auth/login` answers with a bare boolean; there is no token to keep.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub auth: bool,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_body_uses_portuguese_password_key() {
        let body = LoginRequest {
            email: "michael@dundermifflin.com".into(),
            senha: "worldsbestboss".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"email": "michael@dundermifflin.com", "senha": "worldsbestboss"})
        );
    }

    #[test]
    fn missing_auth_flag_reads_as_false() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.auth);
        let response: LoginResponse = serde_json::from_str(r#"{"auth":true}"#).unwrap();
        assert!(response.auth);
    }
}
