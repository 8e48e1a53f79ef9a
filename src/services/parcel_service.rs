// ============================================================================
// PARCEL SERVICE - /parcels/* (todas con bearer)
// ============================================================================

use crate::models::{
    AssignAgentRequest, BookParcelRequest, DashboardStats, GeoPoint, Parcel, ParcelResponse,
    ParcelStatus, StatusUpdateRequest,
};
use crate::services::api_client::{ApiClient, ApiError};

#[derive(Clone, Debug, PartialEq)]
pub struct ParcelService {
    api: ApiClient,
}

impl ParcelService {
    pub fn new(token: &str) -> Self {
        Self {
            api: ApiClient::with_token(token),
        }
    }

    pub async fn book(&self, request: &BookParcelRequest) -> Result<Parcel, ApiError> {
        log::info!("📦 [PARCELS] Reservando envío {} -> {}", request.pickup_address, request.delivery_address);
        let response: ParcelResponse = self.api.post("/parcels/book", request).await?;
        log::info!("✅ [PARCELS] Reservado: {}", response.parcel.tracking_number);
        Ok(response.parcel)
    }

    pub async fn booking_history(&self) -> Result<Vec<Parcel>, ApiError> {
        self.api.get("/parcels/history").await
    }

    pub async fn all(&self) -> Result<Vec<Parcel>, ApiError> {
        self.api.get("/parcels/all").await
    }

    pub async fn assigned(&self) -> Result<Vec<Parcel>, ApiError> {
        self.api.get("/parcels/assigned").await
    }

    pub async fn update_status(
        &self,
        parcel_id: &str,
        status: ParcelStatus,
        location: Option<GeoPoint>,
    ) -> Result<Parcel, ApiError> {
        log::info!("🚚 [PARCELS] {} -> {}", parcel_id, status);
        let body = StatusUpdateRequest { status, location };
        let response: ParcelResponse = self
            .api
            .put(&format!("/parcels/{}/status", parcel_id), &body)
            .await?;
        Ok(response.parcel)
    }

    pub async fn assign_agent(&self, parcel_id: &str, agent_id: &str) -> Result<Parcel, ApiError> {
        log::info!("👤 [PARCELS] Asignando {} a {}", parcel_id, agent_id);
        let body = AssignAgentRequest {
            agent_id: agent_id.to_string(),
        };
        let response: ParcelResponse = self
            .api
            .put(&format!("/parcels/{}/assign", parcel_id), &body)
            .await?;
        Ok(response.parcel)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.api.get("/parcels/dashboard/stats").await
    }
}
