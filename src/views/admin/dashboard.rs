// ============================================================================
// ADMIN DASHBOARD - Resumen global + últimos envíos
// ============================================================================

use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::{Link, ParcelTable};
use crate::hooks::use_parcels;
use crate::routing::Route;
use crate::services::report_service::{format_amount, summarize};
use crate::utils::CURRENCY;
use crate::views::shared::{ErrorBanner, StatCard};

const RECENT_LIMIT: usize = 5;

#[function_component(AdminDashboardView)]
pub fn admin_dashboard_view() -> Html {
    let parcels = use_parcels();

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                vm.load_all().await;
                vm.load_stats().await;
            });
            || ()
        });
    }

    let state = &parcels.state;
    let summary = summarize(&state.parcels, Utc::now().date_naive());
    let recent: Vec<_> = state.parcels.iter().take(RECENT_LIMIT).cloned().collect();

    html! {
        <div class="dashboard">
            <ErrorBanner message={state.error.clone()} />
            <div class="stat-grid">
                <StatCard label="Total Parcels" value={summary.total_parcels.to_string()} />
                <StatCard label="Today's Bookings" value={summary.today_bookings.to_string()} accent="accent-blue" />
                <StatCard label="Failed Deliveries" value={summary.failed_deliveries.to_string()} accent="accent-red" />
                <StatCard
                    label="COD Amount"
                    value={format!("{}{}", CURRENCY, format_amount(summary.cod_amount))}
                    accent="accent-green"
                />
            </div>

            <section class="panel">
                <div class="panel-header">
                    <h2>{"Recent Parcels"}</h2>
                    <Link to={Route::ManageParcels}>{"View all"}</Link>
                </div>
                if state.loading && state.parcels.is_empty() {
                    <p class="muted">{"Loading parcels..."}</p>
                } else {
                    <ParcelTable parcels={recent} show_customer=true show_agent=true />
                }
            </section>
        </div>
    }
}
