use crate::models::{CreateAgentRequest, CreateAgentResponse, User};
use crate::services::api_client::{ApiClient, ApiError};

/// Gestión de usuarios (solo admin)
#[derive(Clone, Debug, PartialEq)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(token: &str) -> Self {
        Self {
            api: ApiClient::with_token(token),
        }
    }

    pub async fn all(&self) -> Result<Vec<User>, ApiError> {
        self.api.get("/users/all").await
    }

    pub async fn agents(&self) -> Result<Vec<User>, ApiError> {
        self.api.get("/users/agents").await
    }

    pub async fn customers(&self) -> Result<Vec<User>, ApiError> {
        self.api.get("/users/customers").await
    }

    pub async fn create_agent(&self, request: &CreateAgentRequest) -> Result<User, ApiError> {
        log::info!("👤 [USERS] Creando agente {}", request.email);
        let response: CreateAgentResponse = self.api.post("/users/create-agent", request).await?;
        Ok(response.agent)
    }
}
