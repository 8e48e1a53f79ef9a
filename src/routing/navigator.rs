// ============================================================================
// NAVIGATOR - History API + store de la ubicación actual
// ============================================================================

use wasm_bindgen::JsValue;
use crate::routing::guard::Redirect;
use crate::routing::route::Route;
use crate::state::reactivity::{ReactiveStore, Reducer};

/// Ubicación actual de la app
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Location {
    pub path: String,
    /// Ruta pedida antes de ser enviado a /login
    pub from: Option<String>,
}

impl Location {
    pub fn route(&self) -> Route {
        Route::recognize(&self.path)
    }
}

pub enum LocationAction {
    Changed(Location),
}

impl Reducer for Location {
    type Action = LocationAction;

    fn reduce(&self, action: LocationAction) -> Self {
        match action {
            LocationAction::Changed(location) => location,
        }
    }
}

pub type LocationStore = ReactiveStore<Location>;

/// Navegación imperativa. Las vistas solo la usan desde callbacks / effects.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    location: LocationStore,
}

impl Navigator {
    pub fn new(location: LocationStore) -> Self {
        Self { location }
    }

    /// Navigator inicializado con la URL actual del navegador
    pub fn from_browser() -> Self {
        let navigator = Self::new(LocationStore::default());
        navigator.sync_from_browser();
        navigator
    }

    pub fn location(&self) -> &LocationStore {
        &self.location
    }

    pub fn push(&self, route: &Route) {
        self.go(route.to_path(), None, false);
    }

    pub fn replace(&self, route: &Route) {
        self.go(route.to_path(), None, true);
    }

    /// Aplica la redirección del guard (siempre replace, como <Navigate replace>)
    pub fn redirect(&self, redirect: &Redirect) {
        self.go(redirect.to.to_path(), redirect.from.clone(), true);
    }

    /// Relee path + state del navegador (arranque y popstate)
    pub fn sync_from_browser(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ [NAV] window no disponible");
            return;
        };
        let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
        let from = window
            .history()
            .ok()
            .and_then(|history| history.state().ok())
            .and_then(|state| state.as_string());
        self.location.dispatch(LocationAction::Changed(Location { path, from }));
    }

    fn go(&self, path: String, from: Option<String>, replace: bool) {
        if cfg!(target_arch = "wasm32") {
            Self::write_history(&path, from.as_deref(), replace);
        }
        log::info!("🧭 [NAV] {} {}", if replace { "replace" } else { "push" }, path);
        self.location.dispatch(LocationAction::Changed(Location { path, from }));
    }

    fn write_history(path: &str, from: Option<&str>, replace: bool) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let state = from.map(JsValue::from_str).unwrap_or(JsValue::NULL);
            let result = if replace {
                history.replace_state_with_url(&state, "", Some(path))
            } else {
                history.push_state_with_url(&state, "", Some(path))
            };
            if let Err(e) = result {
                log::error!("❌ [NAV] Error actualizando history: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_resolves_route() {
        let location = Location {
            path: "/agent/update-status/p9".into(),
            from: None,
        };
        assert_eq!(
            location.route(),
            Route::UpdateParcelStatus { parcel_id: "p9".into() }
        );
    }

    #[test]
    fn location_store_replaces_value() {
        let store = LocationStore::default();
        let changed = store.dispatch(LocationAction::Changed(Location {
            path: "/login".into(),
            from: Some("/admin/reports".into()),
        }));
        assert!(changed);
        assert_eq!(store.snapshot().from.as_deref(), Some("/admin/reports"));
    }

    #[test]
    fn replace_updates_location_store() {
        let navigator = Navigator::new(LocationStore::default());
        navigator.redirect(&Redirect {
            to: Route::Login,
            from: Some("/customer/track".into()),
        });
        assert_eq!(navigator.location().snapshot().path, "/login");
        assert_eq!(navigator.location().snapshot().from.as_deref(), Some("/customer/track"));

        navigator.replace(&Route::AdminDashboard);
        let location = navigator.location().snapshot();
        assert_eq!(location.route(), Route::AdminDashboard);
        assert_eq!(location.from, None);
    }
}
