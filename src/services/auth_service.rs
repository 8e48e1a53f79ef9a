use crate::models::{AuthResponse, Identity, LoginRequest, RegisterRequest, VerifyResponse};
use crate::services::api_client::{ApiClient, ApiError};

/// Colaborador de autenticación (REST en producción, mock en tests)
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Validate a persisted credential and return the identity it belongs to
    async fn verify(&self, token: &str) -> Result<Identity, ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<Identity, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<Identity, ApiError>;

    /// Best-effort server-side invalidation
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

/// Implementación HTTP contra `/auth/*`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn verify(&self, token: &str) -> Result<Identity, ApiError> {
        let response: VerifyResponse = ApiClient::with_token(token).get("/auth/verify").await?;
        if response.success == Some(false) {
            return Err(ApiError::Http { status: 401, message: None });
        }
        Ok(Identity::new(response.user, token))
    }

    async fn login(&self, request: &LoginRequest) -> Result<Identity, ApiError> {
        log::info!("🔐 [AUTH] Login para {}", request.email);
        let response: AuthResponse = ApiClient::new().post("/auth/login", request).await?;
        Ok(response.into())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Identity, ApiError> {
        log::info!("📝 [AUTH] Registro de {} como {}", request.email, request.role);
        let response: AuthResponse = ApiClient::new().post("/auth/register", request).await?;
        Ok(response.into())
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        ApiClient::with_token(token).post_empty("/auth/logout").await
    }
}
