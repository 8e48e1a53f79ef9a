pub mod dashboard;
pub mod manage_parcels;
pub mod manage_users;
pub mod create_agent;
pub mod reports;
mod user_table;

pub use dashboard::AdminDashboardView;
pub use manage_parcels::ManageParcelsView;
pub use manage_users::{ManageAgentsView, ManageCustomersView};
pub use create_agent::CreateAgentView;
pub use reports::ReportsView;
