pub mod api_client;
pub mod auth_service;
pub mod parcel_service;
pub mod user_service;
pub mod report_service;

pub use api_client::{ApiClient, ApiError};
pub use auth_service::{AuthApi, HttpAuthApi};
pub use parcel_service::ParcelService;
pub use user_service::UserService;
