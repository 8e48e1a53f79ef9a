use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::{Link, StatusBadge};
use crate::hooks::use_parcels;
use crate::routing::Route;
use crate::views::shared::ErrorBanner;

/// Paradas pendientes en orden; la optimización de ruta es externa
#[function_component(OptimizedRouteView)]
pub fn optimized_route_view() -> Html {
    let parcels = use_parcels();

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_assigned().await });
            || ()
        });
    }

    let stops = parcels.state.route_stops();

    html! {
        <div class="page">
            <ErrorBanner message={parcels.state.error.clone()} />
            if stops.is_empty() {
                <p class="empty-state">{"No pending stops"}</p>
            } else {
                <ol class="route-stops">
                    { for stops.into_iter().enumerate().map(|(index, parcel)| html! {
                        <li key={parcel.id.clone()} class="route-stop">
                            <span class="stop-number">{(index + 1).to_string()}</span>
                            <div class="stop-body">
                                <strong>{parcel.delivery_address.clone()}</strong>
                                <span class="muted">{format!("Pickup: {}", parcel.pickup_address)}</span>
                                <span class="mono">{parcel.tracking_number.clone()}</span>
                            </div>
                            <StatusBadge status={parcel.status.clone()} />
                            <Link
                                to={Route::UpdateParcelStatus { parcel_id: parcel.id.clone() }}
                                classes={classes!("btn", "btn-small")}
                            >
                                {"Update"}
                            </Link>
                        </li>
                    }) }
                </ol>
            }
        </div>
    }
}
