// ============================================================================
// PARCEL STATE - Listas de paquetes por vista (admin / agente / cliente)
// ============================================================================

use crate::models::{DashboardStats, Parcel};
use crate::state::reactivity::{ReactiveStore, Reducer};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ParcelState {
    pub parcels: Vec<Parcel>,
    pub booking_history: Vec<Parcel>,
    pub assigned_parcels: Vec<Parcel>,
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Petición que puede fallar, con su mensaje por defecto
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParcelRequest {
    Book,
    History,
    All,
    Assigned,
    UpdateStatus,
    AssignAgent,
    Stats,
}

impl ParcelRequest {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ParcelRequest::Book => "Failed to book parcel",
            ParcelRequest::History => "Failed to fetch booking history",
            ParcelRequest::All => "Failed to fetch parcels",
            ParcelRequest::Assigned => "Failed to fetch assigned parcels",
            ParcelRequest::UpdateStatus => "Failed to update parcel status",
            ParcelRequest::AssignAgent => "Failed to assign agent",
            ParcelRequest::Stats => "Failed to fetch dashboard stats",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParcelAction {
    Started(ParcelRequest),
    Failed(ParcelRequest, Option<String>),
    Booked(Parcel),
    HistoryLoaded(Vec<Parcel>),
    AllLoaded(Vec<Parcel>),
    AssignedLoaded(Vec<Parcel>),
    StatusUpdated(Parcel),
    AgentAssigned(Parcel),
    StatsLoaded(DashboardStats),
    ClearError,
    /// Logout: no dejar datos del usuario anterior
    Reset,
}

fn replace_by_id(list: &mut [Parcel], updated: &Parcel) {
    if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
        *slot = updated.clone();
    }
}

impl Reducer for ParcelState {
    type Action = ParcelAction;

    fn reduce(&self, action: ParcelAction) -> Self {
        let mut next = self.clone();
        match action {
            ParcelAction::Started(_) => {
                next.loading = true;
                next.error = None;
            }
            ParcelAction::Failed(request, message) => {
                next.loading = false;
                next.error = Some(message.unwrap_or_else(|| request.fallback_message().to_string()));
            }
            ParcelAction::Booked(parcel) => {
                next.loading = false;
                next.booking_history.insert(0, parcel.clone());
                next.parcels.insert(0, parcel);
            }
            ParcelAction::HistoryLoaded(list) => {
                next.loading = false;
                next.booking_history = list;
            }
            ParcelAction::AllLoaded(list) => {
                next.loading = false;
                next.parcels = list;
            }
            ParcelAction::AssignedLoaded(list) => {
                next.loading = false;
                next.assigned_parcels = list;
            }
            ParcelAction::StatusUpdated(parcel) => {
                next.loading = false;
                replace_by_id(&mut next.parcels, &parcel);
                replace_by_id(&mut next.assigned_parcels, &parcel);
                replace_by_id(&mut next.booking_history, &parcel);
            }
            ParcelAction::AgentAssigned(parcel) => {
                next.loading = false;
                replace_by_id(&mut next.parcels, &parcel);
            }
            ParcelAction::StatsLoaded(stats) => {
                next.loading = false;
                next.stats = Some(stats);
            }
            ParcelAction::ClearError => next.error = None,
            ParcelAction::Reset => next = ParcelState::default(),
        }
        next
    }
}

impl ParcelState {
    pub fn find_assigned(&self, parcel_id: &str) -> Option<&Parcel> {
        self.assigned_parcels.iter().find(|p| p.id == parcel_id)
    }

    /// Búsqueda por tracking entre los asignados (escáner manual)
    pub fn find_assigned_by_tracking(&self, tracking: &str) -> Option<&Parcel> {
        let tracking = tracking.trim();
        if tracking.is_empty() {
            return None;
        }
        self.assigned_parcels
            .iter()
            .find(|p| p.tracking_number.eq_ignore_ascii_case(tracking))
    }

    pub fn find_in_history_by_tracking(&self, tracking: &str) -> Option<&Parcel> {
        let tracking = tracking.trim();
        self.booking_history
            .iter()
            .find(|p| p.tracking_number.eq_ignore_ascii_case(tracking))
    }

    /// Paradas pendientes del agente, en el orden de la lista
    pub fn route_stops(&self) -> Vec<&Parcel> {
        self.assigned_parcels.iter().filter(|p| p.is_pending()).collect()
    }
}

pub type ParcelStore = ReactiveStore<ParcelState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParcelStatus;
    use crate::test_support::parcel;

    #[test]
    fn started_sets_loading_and_clears_error() {
        let state = ParcelState {
            error: Some("old".into()),
            ..ParcelState::default()
        }
        .reduce(ParcelAction::Started(ParcelRequest::All));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_uses_backend_message_or_fallback() {
        let state = ParcelState::default().reduce(ParcelAction::Failed(ParcelRequest::Book, None));
        assert_eq!(state.error.as_deref(), Some("Failed to book parcel"));
        assert!(!state.loading);

        let state = state.reduce(ParcelAction::Failed(
            ParcelRequest::Assigned,
            Some("Token expired".into()),
        ));
        assert_eq!(state.error.as_deref(), Some("Token expired"));
    }

    #[test]
    fn booking_prepends() {
        let state = ParcelState::default()
            .reduce(ParcelAction::HistoryLoaded(vec![parcel("old", ParcelStatus::Delivered)]))
            .reduce(ParcelAction::Booked(parcel("new", ParcelStatus::Booked)));
        assert_eq!(state.booking_history[0].id, "new");
        assert_eq!(state.booking_history.len(), 2);
        assert_eq!(state.parcels[0].id, "new");
    }

    #[test]
    fn status_update_replaces_everywhere_present() {
        let state = ParcelState::default()
            .reduce(ParcelAction::AllLoaded(vec![
                parcel("a", ParcelStatus::Booked),
                parcel("b", ParcelStatus::Booked),
            ]))
            .reduce(ParcelAction::AssignedLoaded(vec![parcel("b", ParcelStatus::Booked)]))
            .reduce(ParcelAction::StatusUpdated(parcel("b", ParcelStatus::Delivered)));

        assert_eq!(state.parcels[0].status, ParcelStatus::Booked);
        assert_eq!(state.parcels[1].status, ParcelStatus::Delivered);
        assert_eq!(state.assigned_parcels[0].status, ParcelStatus::Delivered);
        assert!(state.booking_history.is_empty());
    }

    #[test]
    fn assign_agent_only_touches_all_parcels() {
        let state = ParcelState::default()
            .reduce(ParcelAction::AllLoaded(vec![parcel("a", ParcelStatus::Booked)]))
            .reduce(ParcelAction::HistoryLoaded(vec![parcel("a", ParcelStatus::Booked)]))
            .reduce(ParcelAction::AgentAssigned(parcel("a", ParcelStatus::PickedUp)));
        assert_eq!(state.parcels[0].status, ParcelStatus::PickedUp);
        assert_eq!(state.booking_history[0].status, ParcelStatus::Booked);
    }

    #[test]
    fn tracking_lookup_and_route_stops() {
        let state = ParcelState::default().reduce(ParcelAction::AssignedLoaded(vec![
            parcel("a", ParcelStatus::Delivered),
            parcel("b", ParcelStatus::InTransit),
            parcel("c", ParcelStatus::Failed),
            parcel("d", ParcelStatus::Booked),
        ]));
        assert_eq!(state.find_assigned_by_tracking(" trk-b ").map(|p| p.id.as_str()), Some("b"));
        assert_eq!(state.find_assigned_by_tracking(""), None);
        let stops: Vec<&str> = state.route_stops().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(stops, vec!["b", "d"]);
    }

    #[test]
    fn reset_clears_everything() {
        let state = ParcelState::default()
            .reduce(ParcelAction::AllLoaded(vec![parcel("a", ParcelStatus::Booked)]))
            .reduce(ParcelAction::Reset);
        assert_eq!(state, ParcelState::default());
    }
}
