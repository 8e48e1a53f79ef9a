pub mod auth;
pub mod user;
pub mod parcel;

pub use auth::{ApiErrorBody, AuthResponse, Identity, LoginRequest, RegisterRequest, VerifyResponse};
pub use user::{Role, User};
pub use parcel::{
    AgentRef, AssignAgentRequest, BookParcelRequest, BookingForm, CreateAgentRequest,
    CreateAgentResponse, DashboardStats, GeoPoint, Parcel, ParcelResponse, ParcelSize,
    ParcelStatus, PaymentType, StatusCount, StatusUpdateRequest,
};
