use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::StatusBadge;
use crate::hooks::{use_parcels, use_toasts};
use crate::models::ParcelStatus;
use crate::views::shared::{bind_input, ErrorBanner};

/// Acción rápida del escáner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanAction {
    Pickup,
    Delivery,
}

impl ScanAction {
    pub fn target_status(&self) -> ParcelStatus {
        match self {
            ScanAction::Pickup => ParcelStatus::PickedUp,
            ScanAction::Delivery => ParcelStatus::Delivered,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScanAction::Pickup => "Confirm Pickup",
            ScanAction::Delivery => "Confirm Delivery",
        }
    }
}

#[function_component(QrScannerView)]
pub fn qr_scanner_view() -> Html {
    let parcels = use_parcels();
    let toasts = use_toasts();
    let tracking = use_state(String::new);
    let scanned = use_state(|| None::<String>);

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_assigned().await });
            || ()
        });
    }

    let onsubmit = {
        let tracking = tracking.clone();
        let scanned = scanned.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("📷 [SCAN] Tracking introducido: {}", tracking.trim());
            scanned.set(Some(tracking.trim().to_string()));
        })
    };

    let found = scanned
        .as_deref()
        .and_then(|code| parcels.state.find_assigned_by_tracking(code))
        .cloned();

    let action_button = |action: ScanAction| {
        let Some(parcel) = found.clone() else {
            return html! {};
        };
        let onclick = {
            let vm = parcels.vm.clone();
            let toasts = toasts.clone();
            Callback::from(move |_: MouseEvent| {
                let vm = vm.clone();
                let toasts = toasts.clone();
                let parcel_id = parcel.id.clone();
                spawn_local(async move {
                    if vm.update_status(&parcel_id, action.target_status(), None).await {
                        toasts
                            .success
                            .emit(format!("Parcel marked as {}", action.target_status()));
                    }
                });
            })
        };
        html! { <button class="btn btn-primary" {onclick}>{action.label()}</button> }
    };

    html! {
        <div class="page narrow">
            <ErrorBanner message={parcels.state.error.clone()} />
            <form class="card-form" {onsubmit}>
                <div class="form-group">
                    <label for="tracking">{"Tracking number"}</label>
                    <input
                        id="tracking"
                        type="text"
                        placeholder="Scan or type the tracking number"
                        value={(*tracking).clone()}
                        oninput={bind_input(&tracking)}
                    />
                </div>
                <button type="submit" class="btn btn-secondary">{"Look up"}</button>
            </form>

            if let Some(parcel) = found.clone() {
                <div class="parcel-summary">
                    <h2 class="mono">{parcel.tracking_number.clone()}</h2>
                    <StatusBadge status={parcel.status.clone()} />
                    <p>{format!("{} → {}", parcel.pickup_address, parcel.delivery_address)}</p>
                    <div class="quick-actions">
                        {action_button(ScanAction::Pickup)}
                        {action_button(ScanAction::Delivery)}
                    </div>
                </div>
            } else if scanned.is_some() {
                <p class="empty-state">{"No assigned parcel with that tracking number"}</p>
            }
        </div>
    }
}
