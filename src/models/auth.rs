use serde::{Deserialize, Serialize};
use crate::models::user::{Role, User};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Email y password no vacíos
    pub fn validated(email: &str, password: &str) -> Result<Self, String> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    /// Auto-registro: solo customer o agent, password con longitud mínima
    pub fn validated(
        name: &str,
        email: &str,
        password: &str,
        role: Role,
        min_password_length: usize,
    ) -> Result<Self, String> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err("Name and email are required".to_string());
        }
        if password.chars().count() < min_password_length {
            return Err(format!("Password must be at least {} characters.", min_password_length));
        }
        if role == Role::Admin {
            return Err("Admin accounts cannot be self-registered".to_string());
        }
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        })
    }
}

/// Respuesta de login/register: credencial + identidad
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// Respuesta de /auth/verify
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub user: User,
}

/// Cuerpo de error estándar del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Credencial + identidad validadas: lo que la sesión guarda tras un login o verify
#[derive(Clone, PartialEq, Debug)]
pub struct Identity {
    pub user: User,
    pub token: String,
}

impl Identity {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self { user, token: token.into() }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

impl From<AuthResponse> for Identity {
    fn from(response: AuthResponse) -> Self {
        Identity::new(response.user, response.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_response_without_success_flag() {
        let body = r#"{"user":{"_id":"1","name":"Ana","email":"a@b.com","role":"admin"}}"#;
        let response: VerifyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.success, None);
        assert_eq!(response.user.role, Role::Admin);
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(LoginRequest::validated("", "x").is_err());
        assert!(LoginRequest::validated("a@b.com", "").is_err());
        let request = LoginRequest::validated(" a@b.com ", "pw").unwrap();
        assert_eq!(request.email, "a@b.com");
    }

    #[test]
    fn register_validation() {
        assert_eq!(
            RegisterRequest::validated("Ana", "a@b.com", "12345", Role::Customer, 6),
            Err("Password must be at least 6 characters.".to_string())
        );
        assert!(RegisterRequest::validated("Ana", "a@b.com", "123456", Role::Admin, 6).is_err());
        assert!(RegisterRequest::validated(" ", "a@b.com", "123456", Role::Agent, 6).is_err());
        assert!(RegisterRequest::validated("Ana", "a@b.com", "123456", Role::Agent, 6).is_ok());
    }

    #[test]
    fn register_request_serializes_lowercase_role() {
        let request = RegisterRequest {
            name: "Ana".into(),
            email: "a@b.com".into(),
            password: "secret1".into(),
            role: Role::Agent,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "agent");
    }
}
