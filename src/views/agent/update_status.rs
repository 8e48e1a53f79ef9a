// ============================================================================
// UPDATE PARCEL STATUS - Cambio de estado por el agente asignado
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::{Loading, StatusBadge};
use crate::hooks::{use_location, use_parcels, use_toasts};
use crate::models::{GeoPoint, ParcelStatus};
use crate::routing::Route;
use crate::utils::REDIRECT_AFTER_UPDATE_MS;
use crate::views::shared::{bind_input, select_value, ErrorBanner};

/// Coordenadas opcionales: ambas vacías = sin ubicación
pub fn parse_location(lat: &str, lng: &str) -> Result<Option<GeoPoint>, String> {
    let (lat, lng) = (lat.trim(), lng.trim());
    if lat.is_empty() && lng.is_empty() {
        return Ok(None);
    }
    let lat: f64 = lat.parse().map_err(|_| "Invalid latitude".to_string())?;
    let lng: f64 = lng.parse().map_err(|_| "Invalid longitude".to_string())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err("Coordinates out of range".to_string());
    }
    Ok(Some(GeoPoint { lat, lng }))
}

#[derive(Properties, PartialEq)]
pub struct UpdateParcelStatusProps {
    pub parcel_id: String,
}

#[function_component(UpdateParcelStatusView)]
pub fn update_parcel_status_view(props: &UpdateParcelStatusProps) -> Html {
    let parcels = use_parcels();
    let toasts = use_toasts();
    let location = use_location();
    let status = use_state(|| None::<ParcelStatus>);
    let lat = use_state(String::new);
    let lng = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    // Entrada directa por URL: la lista aún no está cargada
    {
        let vm = parcels.vm.clone();
        let missing = parcels.state.find_assigned(&props.parcel_id).is_none();
        use_effect_with(props.parcel_id.clone(), move |_| {
            if missing {
                spawn_local(async move { vm.load_assigned().await });
            }
            || ()
        });
    }

    let Some(parcel) = parcels.state.find_assigned(&props.parcel_id).cloned() else {
        if parcels.state.loading {
            return html! { <Loading /> };
        }
        return html! {
            <div class="page">
                <ErrorBanner message={parcels.state.error.clone()} />
                <p class="empty-state">{"Parcel not found among your assignments"}</p>
            </div>
        };
    };

    let on_status = {
        let status = status.clone();
        Callback::from(move |e: Event| status.set(Some(ParcelStatus::from(select_value(&e)))))
    };

    let onsubmit = {
        let vm = parcels.vm.clone();
        let navigator = location.navigator.clone();
        let toasts = toasts.clone();
        let parcel_id = parcel.id.clone();
        let (status, lat, lng, local_error) = (status.clone(), lat.clone(), lng.clone(), local_error.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(next) = (*status).clone() else {
                local_error.set(Some("Select a status".to_string()));
                return;
            };
            let point = match parse_location(&lat, &lng) {
                Ok(point) => point,
                Err(message) => {
                    local_error.set(Some(message));
                    return;
                }
            };
            local_error.set(None);

            let vm = vm.clone();
            let navigator = navigator.clone();
            let toasts = toasts.clone();
            let parcel_id = parcel_id.clone();
            spawn_local(async move {
                if vm.update_status(&parcel_id, next, point).await {
                    toasts.success.emit("Parcel status updated".to_string());
                    Timeout::new(REDIRECT_AFTER_UPDATE_MS, move || {
                        navigator.push(&Route::AssignedParcels);
                    })
                    .forget();
                }
            });
        })
    };

    let error = (*local_error).clone().or_else(|| parcels.state.error.clone());

    html! {
        <div class="page narrow">
            <ErrorBanner message={error} />
            <div class="parcel-summary">
                <h2 class="mono">{parcel.tracking_number.clone()}</h2>
                <StatusBadge status={parcel.status.clone()} />
                <p>{format!("{} → {}", parcel.pickup_address, parcel.delivery_address)}</p>
                <p class="muted">{format!("Customer: {}", parcel.customer_name)}</p>
            </div>
            <form class="card-form" {onsubmit}>
                <div class="form-group">
                    <label for="status">{"New status"}</label>
                    <select id="status" onchange={on_status}>
                        <option value="" selected={status.is_none()} disabled=true>{"Select status"}</option>
                        { for ParcelStatus::AGENT_UPDATES.iter().map(|option| html! {
                            <option
                                value={option.as_str().to_string()}
                                selected={(*status).as_ref() == Some(option)}
                            >
                                {option.as_str()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="lat">{"Latitude (optional)"}</label>
                        <input id="lat" type="text" value={(*lat).clone()} oninput={bind_input(&lat)} />
                    </div>
                    <div class="form-group">
                        <label for="lng">{"Longitude (optional)"}</label>
                        <input id="lng" type="text" value={(*lng).clone()} oninput={bind_input(&lng)} />
                    </div>
                </div>
                <button type="submit" class="btn btn-primary" disabled={parcels.state.loading}>
                    { if parcels.state.loading { "Updating..." } else { "Update Status" } }
                </button>
            </form>
        </div>
    }
}
