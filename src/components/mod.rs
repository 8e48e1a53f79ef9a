pub mod app;
pub mod layout;
pub mod link;
pub mod loading;
pub mod parcel_table;
pub mod protected_route;
pub mod status_badge;
pub mod toasts;

pub use app::App;
pub use layout::Layout;
pub use link::Link;
pub use loading::Loading;
pub use parcel_table::ParcelTable;
pub use protected_route::ProtectedRoute;
pub use status_badge::StatusBadge;
pub use toasts::ToastHost;
