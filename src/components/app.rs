// ============================================================================
// APP - Raíz Yew: provider, verificación de arranque y tabla de rutas
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toasts::ToastHost;
use crate::hooks::{use_location, use_session, AppContextProvider};
use crate::routing::Route;
use crate::views::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppContextProvider>
            <Router />
            <ToastHost />
        </AppContextProvider>
    }
}

#[function_component(Router)]
fn router() -> Html {
    let session = use_session();
    let location = use_location();

    // Verificación de arranque: una sola vez al montar
    {
        let verify = session.verify.clone();
        use_effect_with((), move |_| {
            log::info!("🚀 [APP] Verificando credencial guardada");
            verify.emit(());
            || ()
        });
    }

    // Back / forward del navegador
    {
        let navigator = location.navigator.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                navigator.sync_from_browser();
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                {
                    log::error!("❌ [APP] No se pudo registrar popstate: {:?}", e);
                }
            }
            move || {
                if let Some(window) = window {
                    if let Err(e) = window
                        .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                    {
                        log::error!("❌ [APP] No se pudo quitar popstate: {:?}", e);
                    }
                }
            }
        });
    }

    switch(location.location.route())
}

fn switch(route: Route) -> Html {
    let view = match &route {
        Route::Login => return html! { <LoginView /> },
        Route::Register => return html! { <RegisterView /> },
        Route::NotFound => return html! { <NotFoundView /> },

        Route::AdminDashboard => html! { <AdminDashboardView /> },
        Route::ManageParcels => html! { <ManageParcelsView /> },
        Route::ManageAgents => html! { <ManageAgentsView /> },
        Route::ManageCustomers => html! { <ManageCustomersView /> },
        Route::CreateAgent => html! { <CreateAgentView /> },
        Route::Reports => html! { <ReportsView /> },

        Route::AgentDashboard => html! { <AgentDashboardView /> },
        Route::AssignedParcels => html! { <AssignedParcelsView /> },
        Route::UpdateParcelStatus { parcel_id } => html! {
            <UpdateParcelStatusView parcel_id={parcel_id.clone()} />
        },
        Route::QrScanner => html! { <QrScannerView /> },
        Route::OptimizedRoute => html! { <OptimizedRouteView /> },

        Route::CustomerDashboard | Route::Root => html! { <CustomerDashboardView /> },
        Route::BookParcel => html! { <BookParcelView /> },
        Route::BookingHistory => html! { <BookingHistoryView /> },
        Route::TrackParcel => html! { <TrackParcelView /> },
    };

    html! {
        <ProtectedRoute allowed_roles={route.allowed_roles()}>
            <Layout>{view}</Layout>
        </ProtectedRoute>
    }
}
