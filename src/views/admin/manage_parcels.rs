use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::ParcelTable;
use crate::hooks::{use_parcels, use_toasts, use_users};
use crate::models::{Parcel, ParcelStatus};
use crate::views::shared::{select_value, ErrorBanner};

/// Filtro de estado de la tabla ("" = todos)
fn matches_filter(parcel: &Parcel, filter: &str) -> bool {
    filter.is_empty() || parcel.status.as_str() == filter
}

#[function_component(ManageParcelsView)]
pub fn manage_parcels_view() -> Html {
    let parcels = use_parcels();
    let users = use_users();
    let toasts = use_toasts();
    let filter = use_state(String::new);

    {
        let parcel_vm = parcels.vm.clone();
        let users_vm = users.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                parcel_vm.load_all().await;
                users_vm.load_agents().await;
            });
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| filter.set(select_value(&e)))
    };

    let actions = {
        let agents = users.state.agents.clone();
        let vm = parcels.vm.clone();
        let toasts = toasts.clone();
        Callback::from(move |parcel: Parcel| {
            let onchange = {
                let vm = vm.clone();
                let toasts = toasts.clone();
                let parcel_id = parcel.id.clone();
                Callback::from(move |e: Event| {
                    let agent_id = select_value(&e);
                    let vm = vm.clone();
                    let toasts = toasts.clone();
                    let parcel_id = parcel_id.clone();
                    spawn_local(async move {
                        if vm.assign_agent(&parcel_id, &agent_id).await {
                            toasts.success.emit("Agent assigned successfully".to_string());
                        } else {
                            toasts.error.emit("Failed to assign agent".to_string());
                        }
                    });
                })
            };
            let current = parcel.agent_id.as_ref().map(|a| a.id().to_string()).unwrap_or_default();
            html! {
                <select class="agent-select" {onchange}>
                    <option value="" selected={current.is_empty()}>{"Assign agent"}</option>
                    { for agents.iter().map(|agent| html! {
                        <option value={agent.id.clone()} selected={agent.id == current}>
                            {agent.name.clone()}
                        </option>
                    }) }
                </select>
            }
        })
    };

    let on_dismiss: Callback<()> = {
        let vm = parcels.vm.clone();
        Callback::from(move |_| vm.clear_error())
    };

    let visible: Vec<Parcel> = parcels
        .state
        .parcels
        .iter()
        .filter(|p| matches_filter(p, &filter))
        .cloned()
        .collect();

    html! {
        <div class="page">
            <ErrorBanner message={parcels.state.error.clone()} {on_dismiss} />
            <div class="toolbar">
                <select onchange={on_filter}>
                    <option value="" selected={filter.is_empty()}>{"All statuses"}</option>
                    { for ParcelStatus::KNOWN.iter().map(|status| html! {
                        <option value={status.as_str().to_string()} selected={*filter == status.as_str()}>
                            {status.as_str()}
                        </option>
                    }) }
                </select>
                <span class="muted">{format!("{} parcels", visible.len())}</span>
            </div>
            <ParcelTable parcels={visible} show_customer=true show_agent=true actions={actions} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::parcel;

    #[test]
    fn empty_filter_keeps_everything() {
        let p = parcel("p1", ParcelStatus::Delivered);
        assert!(matches_filter(&p, ""));
        assert!(matches_filter(&p, "Delivered"));
        assert!(!matches_filter(&p, "Booked"));
    }
}
