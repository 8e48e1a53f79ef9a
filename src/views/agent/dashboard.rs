use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::{Link, ParcelTable};
use crate::hooks::use_parcels;
use crate::models::ParcelStatus;
use crate::routing::Route;
use crate::services::report_service::{count_by_status, count_pending};
use crate::views::shared::{ErrorBanner, StatCard};

#[function_component(AgentDashboardView)]
pub fn agent_dashboard_view() -> Html {
    let parcels = use_parcels();

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_assigned().await });
            || ()
        });
    }

    let assigned = &parcels.state.assigned_parcels;
    let pending: Vec<_> = parcels.state.route_stops().into_iter().cloned().collect();

    html! {
        <div class="dashboard">
            <ErrorBanner message={parcels.state.error.clone()} />
            <div class="stat-grid">
                <StatCard label="Assigned" value={assigned.len().to_string()} />
                <StatCard label="Pending" value={count_pending(assigned).to_string()} accent="accent-blue" />
                <StatCard
                    label="Delivered"
                    value={count_by_status(assigned, &ParcelStatus::Delivered).to_string()}
                    accent="accent-green"
                />
                <StatCard
                    label="Failed"
                    value={count_by_status(assigned, &ParcelStatus::Failed).to_string()}
                    accent="accent-red"
                />
            </div>
            <div class="quick-actions">
                <Link to={Route::QrScanner} classes={classes!("btn", "btn-primary")}>{"📷 Scan Parcel"}</Link>
                <Link to={Route::OptimizedRoute} classes={classes!("btn", "btn-secondary")}>{"🗺️ View Route"}</Link>
            </div>
            <section class="panel">
                <h2>{"Pending Deliveries"}</h2>
                <ParcelTable parcels={pending} empty_message="Nothing pending. Good job!" />
            </section>
        </div>
    }
}
