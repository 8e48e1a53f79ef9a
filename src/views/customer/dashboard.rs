use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::{Link, ParcelTable};
use crate::hooks::{use_parcels, use_session};
use crate::models::ParcelStatus;
use crate::routing::Route;
use crate::services::report_service::{count_by_status, count_pending};
use crate::views::shared::{ErrorBanner, StatCard};

const RECENT_LIMIT: usize = 5;

#[function_component(CustomerDashboardView)]
pub fn customer_dashboard_view() -> Html {
    let session = use_session();
    let parcels = use_parcels();

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_history().await });
            || ()
        });
    }

    let history = &parcels.state.booking_history;
    let recent: Vec<_> = history.iter().take(RECENT_LIMIT).cloned().collect();
    let greeting = session
        .session
        .user()
        .map(|user| format!("Welcome back, {}", user.name))
        .unwrap_or_default();

    html! {
        <div class="dashboard">
            <h2>{greeting}</h2>
            <ErrorBanner message={parcels.state.error.clone()} />
            <div class="stat-grid">
                <StatCard label="Total Bookings" value={history.len().to_string()} />
                <StatCard label="In Progress" value={count_pending(history).to_string()} accent="accent-blue" />
                <StatCard
                    label="Delivered"
                    value={count_by_status(history, &ParcelStatus::Delivered).to_string()}
                    accent="accent-green"
                />
            </div>
            <div class="quick-actions">
                <Link to={Route::BookParcel} classes={classes!("btn", "btn-primary")}>{"+ Book a Parcel"}</Link>
                <Link to={Route::TrackParcel} classes={classes!("btn", "btn-secondary")}>{"Track Parcel"}</Link>
            </div>
            <section class="panel">
                <div class="panel-header">
                    <h2>{"Recent Bookings"}</h2>
                    <Link to={Route::BookingHistory}>{"View all"}</Link>
                </div>
                <ParcelTable parcels={recent} show_agent=true empty_message="You have not booked any parcels yet" />
            </section>
        </div>
    }
}
