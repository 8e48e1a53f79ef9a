use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::StatusBadge;
use crate::hooks::use_parcels;
use crate::models::{Parcel, ParcelStatus};
use crate::services::report_service::format_amount;
use crate::utils::CURRENCY;
use crate::views::shared::{bind_input, ErrorBanner};

/// Hitos del seguimiento y si ya se alcanzaron
pub fn timeline(status: &ParcelStatus) -> Vec<(ParcelStatus, bool)> {
    let reached = ParcelStatus::KNOWN
        .iter()
        .position(|s| s == status)
        .unwrap_or(0);
    ParcelStatus::KNOWN
        .iter()
        .enumerate()
        // Failed y Delivered son excluyentes: solo se muestra el alcanzado
        .filter(|(_, s)| match status {
            ParcelStatus::Failed => **s != ParcelStatus::Delivered,
            _ => **s != ParcelStatus::Failed,
        })
        .map(|(index, s)| (s.clone(), index <= reached))
        .collect()
}

#[derive(Properties, PartialEq)]
struct TrackingCardProps {
    parcel: Parcel,
}

#[function_component(TrackingCard)]
fn tracking_card(props: &TrackingCardProps) -> Html {
    let parcel = &props.parcel;
    html! {
        <div class="parcel-summary">
            <h2 class="mono">{parcel.tracking_number.clone()}</h2>
            <StatusBadge status={parcel.status.clone()} />
            <ol class="timeline">
                { for timeline(&parcel.status).into_iter().map(|(step, done)| html! {
                    <li class={classes!("timeline-step", done.then_some("done"))}>{step.as_str().to_string()}</li>
                }) }
            </ol>
            <dl class="details">
                <dt>{"From"}</dt><dd>{parcel.pickup_address.clone()}</dd>
                <dt>{"To"}</dt><dd>{parcel.delivery_address.clone()}</dd>
                <dt>{"Agent"}</dt><dd>{parcel.agent_name()}</dd>
                <dt>{"Amount"}</dt><dd>{format!("{}{}", CURRENCY, format_amount(parcel.amount))}</dd>
                if let Some(point) = parcel.location {
                    <dt>{"Last location"}</dt>
                    <dd>{format!("{:.5}, {:.5}", point.lat, point.lng)}</dd>
                }
            </dl>
        </div>
    }
}

#[function_component(TrackParcelView)]
pub fn track_parcel_view() -> Html {
    let parcels = use_parcels();
    let tracking = use_state(String::new);
    let searched = use_state(|| None::<String>);

    {
        let vm = parcels.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_history().await });
            || ()
        });
    }

    let onsubmit = {
        let tracking = tracking.clone();
        let searched = searched.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            searched.set(Some(tracking.trim().to_string()));
        })
    };

    let found = searched
        .as_deref()
        .and_then(|code| parcels.state.find_in_history_by_tracking(code))
        .cloned();

    html! {
        <div class="page narrow">
            <ErrorBanner message={parcels.state.error.clone()} />
            <form class="card-form inline" {onsubmit}>
                <input
                    type="text"
                    placeholder="Enter tracking number"
                    value={(*tracking).clone()}
                    oninput={bind_input(&tracking)}
                />
                <button type="submit" class="btn btn-primary">{"Track"}</button>
            </form>
            if let Some(parcel) = found {
                <TrackingCard {parcel} />
            } else if searched.is_some() {
                <p class="empty-state">{"No booking found with that tracking number"}</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_marks_reached_steps() {
        let steps = timeline(&ParcelStatus::InTransit);
        let done: Vec<bool> = steps.iter().map(|(_, done)| *done).collect();
        assert_eq!(done, vec![true, true, true, false]);
        assert_eq!(steps.last().map(|(s, _)| s.clone()), Some(ParcelStatus::Delivered));
    }

    #[test]
    fn failed_replaces_delivered() {
        let steps = timeline(&ParcelStatus::Failed);
        assert!(steps.iter().all(|(s, done)| *s != ParcelStatus::Delivered && *done));
    }
}
