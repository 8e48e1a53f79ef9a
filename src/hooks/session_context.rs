// ============================================================================
// APP CONTEXT - Stores compartidos entre componentes
// ============================================================================
// Un único provider crea los stores; los hooks los leen con use_context.
// ============================================================================

use yew::prelude::*;
use crate::routing::Navigator;
use crate::state::{ParcelStore, SessionStore, ToastStore, UsersStore};

/// Stores de la app. Clonar comparte el estado.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub session: SessionStore,
    pub parcels: ParcelStore,
    pub users: UsersStore,
    pub toasts: ToastStore,
    pub navigator: Navigator,
}

impl AppContext {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            session: SessionStore::default(),
            parcels: ParcelStore::default(),
            users: UsersStore::default(),
            toasts: ToastStore::default(),
            navigator,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app
#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    let context = use_memo((), |_| AppContext::new(Navigator::from_browser()));

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

/// Contexto de la app. Fuera del provider se usan stores aislados.
#[hook]
pub fn use_app_context() -> AppContext {
    let context = use_context::<AppContext>();
    let fallback = use_memo((), |_| {
        log::warn!("⚠️ [CTX] Componente fuera de AppContextProvider");
        AppContext::new(Navigator::new(Default::default()))
    });
    context.unwrap_or_else(|| (*fallback).clone())
}
