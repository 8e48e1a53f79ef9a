use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::ParcelTable;
use crate::hooks::use_parcels;
use crate::views::shared::ErrorBanner;

#[function_component(BookingHistoryView)]
pub fn booking_history_view() -> Html {
    let parcels = use_parcels();

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_history().await });
            || ()
        });
    }

    html! {
        <div class="page">
            <ErrorBanner message={parcels.state.error.clone()} />
            if parcels.state.loading && parcels.state.booking_history.is_empty() {
                <p class="muted">{"Loading bookings..."}</p>
            } else {
                <ParcelTable
                    parcels={parcels.state.booking_history.clone()}
                    show_agent=true
                    empty_message="You have not booked any parcels yet"
                />
            }
        </div>
    }
}
