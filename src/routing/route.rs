// ============================================================================
// ROUTE TABLE - path <-> vista, con la zona (rol) de cada una
// ============================================================================

use crate::models::Role;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,

    AdminDashboard,
    ManageParcels,
    ManageAgents,
    ManageCustomers,
    CreateAgent,
    Reports,

    AgentDashboard,
    AssignedParcels,
    UpdateParcelStatus { parcel_id: String },
    QrScanner,
    OptimizedRoute,

    CustomerDashboard,
    BookParcel,
    BookingHistory,
    TrackParcel,

    /// `/`: cualquier rol autenticado
    Root,
    NotFound,
}

/// Zona protegida a la que pertenece una ruta
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Login / registro / 404: sin guard
    Public,
    Admin,
    Agent,
    Customer,
    /// Guard sin restricción de rol
    AnyRole,
}

impl Zone {
    pub fn is_guarded(&self) -> bool {
        !matches!(self, Zone::Public)
    }

    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Zone::Admin => &[Role::Admin],
            Zone::Agent => &[Role::Agent],
            Zone::Customer => &[Role::Customer],
            Zone::Public | Zone::AnyRole => &[],
        }
    }
}

impl Route {
    /// Resuelve un path del navegador. Ignora query, hash y barra final.
    pub fn recognize(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Root,

            ["login"] => Route::Login,
            ["login", "register"] => Route::Register,

            ["admin"] | ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "manage-parcels"] => Route::ManageParcels,
            ["admin", "manage-agents"] => Route::ManageAgents,
            ["admin", "manage-customers"] => Route::ManageCustomers,
            ["admin", "create-agent"] => Route::CreateAgent,
            ["admin", "reports"] => Route::Reports,

            ["agent"] | ["agent", "dashboard"] => Route::AgentDashboard,
            ["agent", "assigned-parcels"] => Route::AssignedParcels,
            ["agent", "update-status", parcel_id] => Route::UpdateParcelStatus {
                parcel_id: (*parcel_id).to_string(),
            },
            ["agent", "qr-scanner"] => Route::QrScanner,
            ["agent", "optimized-route"] => Route::OptimizedRoute,

            ["customer"] | ["customer", "dashboard"] => Route::CustomerDashboard,
            ["customer", "book-parcel"] => Route::BookParcel,
            ["customer", "booking-history"] => Route::BookingHistory,
            ["customer", "track-parcel"] => Route::TrackParcel,

            _ => Route::NotFound,
        }
    }

    /// Path canónico de la ruta
    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/login/register".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::ManageParcels => "/admin/manage-parcels".to_string(),
            Route::ManageAgents => "/admin/manage-agents".to_string(),
            Route::ManageCustomers => "/admin/manage-customers".to_string(),
            Route::CreateAgent => "/admin/create-agent".to_string(),
            Route::Reports => "/admin/reports".to_string(),
            Route::AgentDashboard => "/agent/dashboard".to_string(),
            Route::AssignedParcels => "/agent/assigned-parcels".to_string(),
            Route::UpdateParcelStatus { parcel_id } => format!("/agent/update-status/{}", parcel_id),
            Route::QrScanner => "/agent/qr-scanner".to_string(),
            Route::OptimizedRoute => "/agent/optimized-route".to_string(),
            Route::CustomerDashboard => "/customer/dashboard".to_string(),
            Route::BookParcel => "/customer/book-parcel".to_string(),
            Route::BookingHistory => "/customer/booking-history".to_string(),
            Route::TrackParcel => "/customer/track-parcel".to_string(),
            Route::Root => "/".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn zone(&self) -> Zone {
        match self {
            Route::Login | Route::Register | Route::NotFound => Zone::Public,
            Route::AdminDashboard
            | Route::ManageParcels
            | Route::ManageAgents
            | Route::ManageCustomers
            | Route::CreateAgent
            | Route::Reports => Zone::Admin,
            Route::AgentDashboard
            | Route::AssignedParcels
            | Route::UpdateParcelStatus { .. }
            | Route::QrScanner
            | Route::OptimizedRoute => Zone::Agent,
            Route::CustomerDashboard
            | Route::BookParcel
            | Route::BookingHistory
            | Route::TrackParcel => Zone::Customer,
            Route::Root => Zone::AnyRole,
        }
    }

    pub fn allowed_roles(&self) -> &'static [Role] {
        self.zone().allowed_roles()
    }

    /// Home fija por rol (destino de las redirecciones por rol incorrecto)
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::Agent => Route::AgentDashboard,
            _ => Route::CustomerDashboard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Register => "Register",
            Route::AdminDashboard | Route::AgentDashboard | Route::CustomerDashboard | Route::Root => "Dashboard",
            Route::ManageParcels => "Manage Parcels",
            Route::ManageAgents => "Manage Agents",
            Route::ManageCustomers => "Manage Customers",
            Route::CreateAgent => "Create Agent",
            Route::Reports => "Reports",
            Route::AssignedParcels => "Assigned Parcels",
            Route::UpdateParcelStatus { .. } => "Update Status",
            Route::QrScanner => "Scanner",
            Route::OptimizedRoute => "Route",
            Route::BookParcel => "Book Parcel",
            Route::BookingHistory => "Booking History",
            Route::TrackParcel => "Track Parcel",
            Route::NotFound => "Not Found",
        }
    }

    /// Entradas del menú lateral de cada zona
    pub fn menu_for(role: Role) -> Vec<Route> {
        match role {
            Role::Admin => vec![
                Route::AdminDashboard,
                Route::ManageParcels,
                Route::ManageAgents,
                Route::ManageCustomers,
                Route::CreateAgent,
                Route::Reports,
            ],
            Role::Agent => vec![
                Route::AgentDashboard,
                Route::AssignedParcels,
                Route::QrScanner,
                Route::OptimizedRoute,
            ],
            Role::Customer => vec![
                Route::CustomerDashboard,
                Route::BookParcel,
                Route::BookingHistory,
                Route::TrackParcel,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_round_trip() {
        let routes = [
            Route::Login,
            Route::Register,
            Route::AdminDashboard,
            Route::ManageParcels,
            Route::ManageAgents,
            Route::ManageCustomers,
            Route::CreateAgent,
            Route::Reports,
            Route::AgentDashboard,
            Route::AssignedParcels,
            Route::UpdateParcelStatus { parcel_id: "abc123".into() },
            Route::QrScanner,
            Route::OptimizedRoute,
            Route::CustomerDashboard,
            Route::BookParcel,
            Route::BookingHistory,
            Route::TrackParcel,
            Route::Root,
        ];
        for route in routes {
            assert_eq!(Route::recognize(&route.to_path()), route);
        }
    }

    #[test]
    fn zone_roots_and_trailing_slashes() {
        assert_eq!(Route::recognize("/admin"), Route::AdminDashboard);
        assert_eq!(Route::recognize("/agent/"), Route::AgentDashboard);
        assert_eq!(Route::recognize("/customer/dashboard/"), Route::CustomerDashboard);
        assert_eq!(Route::recognize("/login?from=x"), Route::Login);
        assert_eq!(Route::recognize(""), Route::Root);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/admin/unknown"), Route::NotFound);
        assert_eq!(Route::recognize("/agent/update-status"), Route::NotFound);
        assert_eq!(Route::recognize("/nope"), Route::NotFound);
        assert!(!Route::NotFound.zone().is_guarded());
    }

    #[test]
    fn zones_carry_role_allow_lists() {
        assert_eq!(Route::Reports.allowed_roles(), &[Role::Admin]);
        assert_eq!(Route::QrScanner.allowed_roles(), &[Role::Agent]);
        assert_eq!(Route::TrackParcel.allowed_roles(), &[Role::Customer]);
        assert!(Route::Root.allowed_roles().is_empty());
        assert!(Route::Root.zone().is_guarded());
        assert!(!Route::Login.zone().is_guarded());
        assert!(!Route::Register.zone().is_guarded());
    }

    #[test]
    fn role_homes() {
        assert_eq!(Route::home_for(Role::Admin).to_path(), "/admin/dashboard");
        assert_eq!(Route::home_for(Role::Agent).to_path(), "/agent/dashboard");
        assert_eq!(Route::home_for(Role::Customer).to_path(), "/customer/dashboard");
    }
}
