use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::{Link, ParcelTable};
use crate::hooks::use_parcels;
use crate::models::Parcel;
use crate::routing::Route;
use crate::views::shared::ErrorBanner;

#[function_component(AssignedParcelsView)]
pub fn assigned_parcels_view() -> Html {
    let parcels = use_parcels();

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_assigned().await });
            || ()
        });
    }

    let actions = Callback::from(|parcel: Parcel| {
        if !parcel.is_pending() {
            return html! { <span class="muted">{"Closed"}</span> };
        }
        html! {
            <Link
                to={Route::UpdateParcelStatus { parcel_id: parcel.id.clone() }}
                classes={classes!("btn", "btn-small")}
            >
                {"Update"}
            </Link>
        }
    });

    html! {
        <div class="page">
            <ErrorBanner message={parcels.state.error.clone()} />
            if parcels.state.loading && parcels.state.assigned_parcels.is_empty() {
                <p class="muted">{"Loading assigned parcels..."}</p>
            } else {
                <ParcelTable
                    parcels={parcels.state.assigned_parcels.clone()}
                    show_customer=true
                    actions={actions}
                    empty_message="No parcels assigned to you"
                />
            }
        </div>
    }
}
