use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::components::Link;
use crate::hooks::use_users;
use crate::routing::Route;
use crate::views::admin::user_table::UserTable;
use crate::views::shared::ErrorBanner;

#[function_component(ManageAgentsView)]
pub fn manage_agents_view() -> Html {
    let users = use_users();

    {
        let vm = users.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_agents().await });
            || ()
        });
    }

    html! {
        <div class="page">
            <ErrorBanner message={users.state.error.clone()} />
            <div class="toolbar">
                <span class="muted">{format!("{} agents", users.state.agents.len())}</span>
                <Link to={Route::CreateAgent} classes={classes!("btn", "btn-primary")}>{"+ New Agent"}</Link>
            </div>
            <UserTable users={users.state.agents.clone()} empty_message="No agents yet" />
        </div>
    }
}

#[function_component(ManageCustomersView)]
pub fn manage_customers_view() -> Html {
    let users = use_users();

    {
        let vm = users.vm.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { vm.load_customers().await });
            || ()
        });
    }

    html! {
        <div class="page">
            <ErrorBanner message={users.state.error.clone()} />
            <div class="toolbar">
                <span class="muted">{format!("{} customers", users.state.customers.len())}</span>
            </div>
            <UserTable users={users.state.customers.clone()} empty_message="No customers yet" />
        </div>
    }
}
