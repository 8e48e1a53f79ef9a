use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{DateTime, Utc};
use crate::models::user::User;

// ============================================================================
// PARCEL - Paquete tal como lo devuelve /parcels/*
// ============================================================================

/// Estado del paquete. Los estados desconocidos se conservan tal cual.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParcelStatus {
    Booked,
    PickedUp,
    InTransit,
    Delivered,
    Failed,
    Other(String),
}

impl ParcelStatus {
    /// Estados que un agente puede asignar manualmente
    pub const AGENT_UPDATES: [ParcelStatus; 4] = [
        ParcelStatus::PickedUp,
        ParcelStatus::InTransit,
        ParcelStatus::Delivered,
        ParcelStatus::Failed,
    ];

    /// Estados conocidos, en orden de ciclo de vida
    pub const KNOWN: [ParcelStatus; 5] = [
        ParcelStatus::Booked,
        ParcelStatus::PickedUp,
        ParcelStatus::InTransit,
        ParcelStatus::Delivered,
        ParcelStatus::Failed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ParcelStatus::Booked => "Booked",
            ParcelStatus::PickedUp => "Picked Up",
            ParcelStatus::InTransit => "In Transit",
            ParcelStatus::Delivered => "Delivered",
            ParcelStatus::Failed => "Failed",
            ParcelStatus::Other(raw) => raw,
        }
    }

    /// Delivered y Failed son terminales
    pub fn is_pending(&self) -> bool {
        !matches!(self, ParcelStatus::Delivered | ParcelStatus::Failed)
    }

    /// Clase CSS del badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ParcelStatus::Booked => "badge badge-booked",
            ParcelStatus::PickedUp => "badge badge-picked-up",
            ParcelStatus::InTransit => "badge badge-in-transit",
            ParcelStatus::Delivered => "badge badge-delivered",
            ParcelStatus::Failed => "badge badge-failed",
            ParcelStatus::Other(_) => "badge",
        }
    }
}

impl From<String> for ParcelStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Booked" => ParcelStatus::Booked,
            "Picked Up" => ParcelStatus::PickedUp,
            "In Transit" => ParcelStatus::InTransit,
            "Delivered" => ParcelStatus::Delivered,
            "Failed" => ParcelStatus::Failed,
            _ => ParcelStatus::Other(raw),
        }
    }
}

impl From<ParcelStatus> for String {
    fn from(status: ParcelStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParcelSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl ParcelSize {
    pub const ALL: [ParcelSize; 3] = [ParcelSize::Small, ParcelSize::Medium, ParcelSize::Large];

    /// Tarifa fija por tamaño
    pub fn price(&self) -> f64 {
        match self {
            ParcelSize::Small => 80.0,
            ParcelSize::Medium => 120.0,
            ParcelSize::Large => 200.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelSize::Small => "small",
            ParcelSize::Medium => "medium",
            ParcelSize::Large => "large",
        }
    }

    pub fn parse(value: &str) -> Option<ParcelSize> {
        ParcelSize::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentType {
    #[default]
    #[serde(rename = "COD")]
    Cod,
    #[serde(rename = "prepaid")]
    Prepaid,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Cod => "COD",
            PaymentType::Prepaid => "prepaid",
        }
    }

    pub fn parse(value: &str) -> Option<PaymentType> {
        match value {
            "COD" => Some(PaymentType::Cod),
            "prepaid" => Some(PaymentType::Prepaid),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Agente asignado: id plano o documento poblado
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentRef {
    Populated(AgentSummary),
    Id(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl AgentRef {
    pub fn id(&self) -> &str {
        match self {
            AgentRef::Populated(agent) => &agent.id,
            AgentRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AgentRef::Populated(agent) => Some(&agent.name),
            AgentRef::Id(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub tracking_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    pub pickup_address: String,
    pub delivery_address: String,
    #[serde(default)]
    pub parcel_size: ParcelSize,
    #[serde(default)]
    pub parcel_type: String,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub cod_amount: f64,
    pub status: ParcelStatus,
    #[serde(default)]
    pub agent_id: Option<AgentRef>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Parcel {
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn agent_name(&self) -> &str {
        self.agent_id
            .as_ref()
            .and_then(AgentRef::name)
            .unwrap_or("Not assigned")
    }
}

// ============================================================================
// REQUESTS / RESPONSES
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookParcelRequest {
    pub pickup_address: String,
    pub delivery_address: String,
    pub parcel_size: ParcelSize,
    pub parcel_type: String,
    pub payment_type: PaymentType,
    pub amount: f64,
    pub cod_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Datos del formulario de reserva antes de validar
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BookingForm {
    pub pickup_address: String,
    pub delivery_address: String,
    pub parcel_size: ParcelSize,
    pub parcel_type: String,
    pub payment_type: PaymentType,
    pub cod_amount: f64,
    pub notes: String,
}

impl BookingForm {
    /// Valida y calcula importe. El COD se fuerza a 0 en prepago.
    pub fn into_request(self) -> Result<BookParcelRequest, String> {
        if self.pickup_address.trim().is_empty() || self.delivery_address.trim().is_empty() {
            return Err("Pickup and delivery addresses are required".to_string());
        }
        if self.parcel_type.trim().is_empty() {
            return Err("Parcel type is required".to_string());
        }
        if self.cod_amount < 0.0 {
            return Err("COD amount cannot be negative".to_string());
        }

        let cod_amount = match self.payment_type {
            PaymentType::Cod => self.cod_amount,
            PaymentType::Prepaid => 0.0,
        };
        let notes = Some(self.notes.trim().to_string()).filter(|n| !n.is_empty());

        Ok(BookParcelRequest {
            pickup_address: self.pickup_address.trim().to_string(),
            delivery_address: self.delivery_address.trim().to_string(),
            amount: self.parcel_size.price(),
            parcel_size: self.parcel_size,
            parcel_type: self.parcel_type.trim().to_string(),
            payment_type: self.payment_type,
            cod_amount,
            notes,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ParcelStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAgentRequest {
    pub agent_id: String,
}

/// Respuesta de book / status / assign
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParcelResponse {
    pub parcel: Parcel,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    #[serde(rename = "_id")]
    pub status: ParcelStatus,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub status_breakdown: Vec<StatusCount>,
    #[serde(default)]
    pub total_parcels: Option<u64>,
    #[serde(default)]
    pub today_bookings: Option<u64>,
    #[serde(default)]
    pub failed_deliveries: Option<u64>,
    #[serde(default)]
    pub cod_amount: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateAgentResponse {
    pub agent: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel_json(agent: &str) -> String {
        format!(
            r#"{{"_id":"p1","trackingNumber":"TRK1","customerName":"Ana","customerEmail":"a@b.com",
            "pickupAddress":"A","deliveryAddress":"B","parcelSize":"medium","parcelType":"docs",
            "paymentType":"COD","amount":120,"codAmount":50,"status":"In Transit","agentId":{},
            "createdAt":"2024-05-01T10:00:00.000Z"}}"#,
            agent
        )
    }

    #[test]
    fn parcel_with_populated_agent() {
        let parcel: Parcel =
            serde_json::from_str(&parcel_json(r#"{"_id":"a1","name":"Bob","email":"bob@x.com"}"#)).unwrap();
        assert_eq!(parcel.status, ParcelStatus::InTransit);
        assert_eq!(parcel.parcel_size, ParcelSize::Medium);
        assert_eq!(parcel.agent_name(), "Bob");
        assert_eq!(parcel.agent_id.as_ref().map(AgentRef::id), Some("a1"));
    }

    #[test]
    fn parcel_with_plain_or_missing_agent() {
        let plain: Parcel = serde_json::from_str(&parcel_json(r#""a1""#)).unwrap();
        assert_eq!(plain.agent_name(), "Not assigned");
        let missing: Parcel = serde_json::from_str(&parcel_json("null")).unwrap();
        assert!(missing.agent_id.is_none());
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: ParcelStatus = serde_json::from_str(r#""Returned""#).unwrap();
        assert_eq!(status, ParcelStatus::Other("Returned".into()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""Returned""#);
        assert!(status.is_pending());
        assert!(!ParcelStatus::Delivered.is_pending());
    }

    #[test]
    fn prepaid_booking_drops_cod_amount() {
        let form = BookingForm {
            pickup_address: " 1 Main St ".into(),
            delivery_address: "2 High St".into(),
            parcel_size: ParcelSize::Large,
            parcel_type: "fragile".into(),
            payment_type: PaymentType::Prepaid,
            cod_amount: 300.0,
            notes: "  ".into(),
        };
        let request = form.into_request().unwrap();
        assert_eq!(request.amount, 200.0);
        assert_eq!(request.cod_amount, 0.0);
        assert_eq!(request.pickup_address, "1 Main St");
        assert_eq!(request.notes, None);
    }

    #[test]
    fn booking_requires_addresses() {
        let form = BookingForm {
            parcel_type: "docs".into(),
            ..BookingForm::default()
        };
        assert!(form.into_request().is_err());
    }
}
