// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: arma la request, adjunta el bearer y traduce
// los fallos a ApiError.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use crate::config::CONFIG;
use crate::models::ApiErrorBody;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    /// La request no llegó (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),
    /// El backend respondió con status != 2xx
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Http { status: u16, message: Option<String> },
    /// Cuerpo de respuesta ilegible
    #[error("Parse error: {0}")]
    Parse(String),
    /// No se pudo serializar el cuerpo de la request
    #[error("Serialization error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Mensaje del backend si lo hay, si no el fallback de la operación
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Solo el mensaje del backend (los reducers ponen su propio fallback)
    pub fn backend_message(&self) -> Option<String> {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            _ => None,
        }
    }

    /// El backend rechazó la credencial (401/403)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

/// Extrae `{ message }` de un cuerpo de error, si lo hay
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self { token: None }
    }

    /// Cliente que adjunta `Authorization: Bearer <token>`. Token vacío = sin header.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: Some(token).filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        CONFIG.endpoint(path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(Request::get(&self.url(path)));
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    /// POST sin cuerpo cuya respuesta no interesa (logout)
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(Self::http_error(response).await);
        }
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(Self::http_error(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn http_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message_from_body(&body);
        log::error!("❌ [API] HTTP {} {}", status, response.status_text());
        ApiError::Http { status, message }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
