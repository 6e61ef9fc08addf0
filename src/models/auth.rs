use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Body de login y de registro de operador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingField("username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(())
    }
}

/// Operador autenticado (solo display, no se persiste)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorProfile {
    pub id: i64,
    #[serde(default)]
    pub username: String,
}

/// Respuesta de `POST /bus-owner/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub owner: Option<OperatorProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_tolerates_missing_owner() {
        let response: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(response.token, "abc");
        assert!(response.owner.is_none());

        let full: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","owner":{"id":9,"username":"greenline"}}"#).unwrap();
        assert_eq!(full.owner.map(|o| o.username), Some("greenline".to_string()));
    }

    #[test]
    fn credentials_require_username_and_password() {
        assert!(Credentials::new("greenline", "pw").validate().is_ok());
        assert_eq!(
            Credentials::new(" ", "pw").validate(),
            Err(ValidationError::MissingField("username"))
        );
        assert_eq!(
            Credentials::new("greenline", "").validate(),
            Err(ValidationError::MissingField("password"))
        );
    }
}
