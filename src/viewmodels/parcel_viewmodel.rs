// ============================================================================
// PARCEL VIEWMODEL - Peticiones /parcels/* sobre el ParcelStore
// ============================================================================
// Started -> servicio -> acción de éxito o Failed(request, mensaje backend).
// Los métodos que cambian datos devuelven bool para que la vista decida
// (toast, redirección).
// ============================================================================

use crate::models::{BookingForm, GeoPoint, Parcel, ParcelStatus};
use crate::services::{ApiError, ParcelService};
use crate::state::{ParcelAction, ParcelRequest, ParcelState, ParcelStore};

/// Aplica el resultado de una petición al store. `true` si fue Ok.
fn settle<T>(
    store: &ParcelStore,
    request: ParcelRequest,
    result: Result<T, ApiError>,
    on_ok: impl FnOnce(T) -> ParcelAction,
) -> bool {
    match result {
        Ok(value) => {
            store.dispatch(on_ok(value));
            true
        }
        Err(e) => {
            log::error!("❌ [PARCELS] {:?} falló: {}", request, e);
            store.dispatch(ParcelAction::Failed(request, e.backend_message()));
            false
        }
    }
}

#[derive(Clone)]
pub struct ParcelViewModel {
    store: ParcelStore,
    service: ParcelService,
}

impl ParcelViewModel {
    pub fn new(store: ParcelStore, token: &str) -> Self {
        Self {
            store,
            service: ParcelService::new(token),
        }
    }

    pub async fn book(&self, form: BookingForm) -> bool {
        let request = match form.into_request() {
            Ok(request) => request,
            Err(message) => {
                self.store.dispatch(ParcelAction::Failed(ParcelRequest::Book, Some(message)));
                return false;
            }
        };
        self.store.dispatch(ParcelAction::Started(ParcelRequest::Book));
        let result = self.service.book(&request).await;
        settle(&self.store, ParcelRequest::Book, result, ParcelAction::Booked)
    }

    pub async fn load_history(&self) {
        self.store.dispatch(ParcelAction::Started(ParcelRequest::History));
        let result = self.service.booking_history().await;
        settle(&self.store, ParcelRequest::History, result, ParcelAction::HistoryLoaded);
    }

    pub async fn load_all(&self) {
        self.store.dispatch(ParcelAction::Started(ParcelRequest::All));
        let result = self.service.all().await;
        settle(&self.store, ParcelRequest::All, result, ParcelAction::AllLoaded);
    }

    pub async fn load_assigned(&self) {
        self.store.dispatch(ParcelAction::Started(ParcelRequest::Assigned));
        let result = self.service.assigned().await;
        settle(&self.store, ParcelRequest::Assigned, result, ParcelAction::AssignedLoaded);
    }

    pub async fn update_status(&self, parcel_id: &str, status: ParcelStatus, location: Option<GeoPoint>) -> bool {
        self.store.dispatch(ParcelAction::Started(ParcelRequest::UpdateStatus));
        let result = self.service.update_status(parcel_id, status, location).await;
        settle(&self.store, ParcelRequest::UpdateStatus, result, ParcelAction::StatusUpdated)
    }

    pub async fn assign_agent(&self, parcel_id: &str, agent_id: &str) -> bool {
        if agent_id.is_empty() {
            return false;
        }
        self.store.dispatch(ParcelAction::Started(ParcelRequest::AssignAgent));
        let result = self.service.assign_agent(parcel_id, agent_id).await;
        settle(&self.store, ParcelRequest::AssignAgent, result, ParcelAction::AgentAssigned)
    }

    pub async fn load_stats(&self) {
        self.store.dispatch(ParcelAction::Started(ParcelRequest::Stats));
        let result = self.service.dashboard_stats().await;
        settle(&self.store, ParcelRequest::Stats, result, ParcelAction::StatsLoaded);
    }

    pub fn clear_error(&self) {
        self.store.dispatch(ParcelAction::ClearError);
    }
}

/// Paquete recién actualizado, buscado en cualquiera de las listas
pub fn find_any<'a>(state: &'a ParcelState, parcel_id: &str) -> Option<&'a Parcel> {
    state
        .assigned_parcels
        .iter()
        .chain(state.parcels.iter())
        .chain(state.booking_history.iter())
        .find(|p| p.id == parcel_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::parcel;

    #[test]
    fn failure_uses_backend_message_or_fallback() {
        let store = ParcelStore::default();
        store.dispatch(ParcelAction::Started(ParcelRequest::All));
        let ok = settle::<Vec<Parcel>>(
            &store,
            ParcelRequest::All,
            Err(ApiError::Network("offline".into())),
            ParcelAction::AllLoaded,
        );
        assert!(!ok);
        let state = store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch parcels"));

        settle::<Parcel>(
            &store,
            ParcelRequest::UpdateStatus,
            Err(ApiError::Http { status: 403, message: Some("Not your parcel".into()) }),
            ParcelAction::StatusUpdated,
        );
        assert_eq!(store.snapshot().error.as_deref(), Some("Not your parcel"));
    }

    #[test]
    fn success_dispatches_the_mapped_action() {
        let store = ParcelStore::default();
        store.dispatch(ParcelAction::Started(ParcelRequest::Assigned));
        let ok = settle(
            &store,
            ParcelRequest::Assigned,
            Ok(vec![parcel("p1", ParcelStatus::PickedUp)]),
            ParcelAction::AssignedLoaded,
        );
        assert!(ok);
        let state = store.snapshot();
        assert_eq!(state.assigned_parcels.len(), 1);
        assert!(find_any(&state, "p1").is_some());
        assert!(find_any(&state, "nope").is_none());
    }
}
