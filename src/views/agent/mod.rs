pub mod dashboard;
pub mod assigned_parcels;
pub mod update_status;
pub mod scanner;
pub mod route_view;

pub use dashboard::AgentDashboardView;
pub use assigned_parcels::AssignedParcelsView;
pub use update_status::UpdateParcelStatusView;
pub use scanner::QrScannerView;
pub use route_view::OptimizedRouteView;
