use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::StatusBadge;
use crate::hooks::{use_parcels, use_toasts};
use crate::services::report_service::{download_csv, format_amount, report_filename, report_summary, status_breakdown, to_csv};
use crate::utils::CURRENCY;
use crate::views::shared::{ErrorBanner, StatCard};

#[function_component(ReportsView)]
pub fn reports_view() -> Html {
    let parcels = use_parcels();
    let toasts = use_toasts();

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                vm.load_stats().await;
                vm.load_all().await;
            });
            || ()
        });
    }

    let state = &parcels.state;
    let summary = report_summary(state.stats.as_ref(), &state.parcels, Utc::now().date_naive());
    let breakdown = state.stats.as_ref().map(status_breakdown).unwrap_or_default();

    let on_export = {
        let list = state.parcels.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            if list.is_empty() {
                toasts.error.emit("No parcels to export".to_string());
                return;
            }
            let filename = report_filename(Utc::now().date_naive());
            match download_csv(&filename, &to_csv(&list)) {
                Ok(()) => toasts.success.emit("Report exported".to_string()),
                Err(e) => {
                    log::error!("❌ [REPORTS] Export fallido: {:?}", e);
                    toasts.error.emit("Failed to export report".to_string());
                }
            }
        })
    };

    html! {
        <div class="page">
            <ErrorBanner message={state.error.clone()} />
            <div class="toolbar">
                <button class="btn btn-primary" onclick={on_export}>{"Export CSV"}</button>
            </div>
            <div class="stat-grid">
                <StatCard label="Total Parcels" value={summary.total_parcels.to_string()} />
                <StatCard label="Today's Bookings" value={summary.today_bookings.to_string()} accent="accent-green" />
                <StatCard label="Failed Deliveries" value={summary.failed_deliveries.to_string()} accent="accent-red" />
                <StatCard
                    label="Total COD Amount"
                    value={format!("{}{}", CURRENCY, format_amount(summary.cod_amount))}
                    accent="accent-purple"
                />
            </div>
            <section class="panel">
                <h2>{"Status Breakdown"}</h2>
                if breakdown.is_empty() {
                    <p class="muted">{"No statistics available"}</p>
                } else {
                    <ul class="breakdown">
                        { for breakdown.into_iter().map(|(status, count)| html! {
                            <li key={status.as_str().to_string()}>
                                <StatusBadge status={status.clone()} />
                                <span class="count">{count.to_string()}</span>
                            </li>
                        }) }
                    </ul>
                }
            </section>
        </div>
    }
}
