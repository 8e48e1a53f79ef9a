// ============================================================================
// VIEWS - Una vista por ruta
// ============================================================================

pub mod shared;
pub mod auth;
pub mod admin;
pub mod agent;
pub mod customer;
pub mod not_found;

pub use auth::{LoginView, RegisterView};
pub use admin::{
    AdminDashboardView, CreateAgentView, ManageAgentsView, ManageCustomersView, ManageParcelsView, ReportsView,
};
pub use agent::{AgentDashboardView, AssignedParcelsView, OptimizedRouteView, QrScannerView, UpdateParcelStatusView};
pub use customer::{BookParcelView, BookingHistoryView, CustomerDashboardView, TrackParcelView};
pub use not_found::NotFoundView;
