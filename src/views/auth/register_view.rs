use yew::prelude::*;
use crate::components::Link;
use crate::config::CONFIG;
use crate::hooks::{use_location, use_session, RegisterInput};
use crate::models::Role;
use crate::routing::Route;
use crate::views::shared::{bind_input, select_value, ErrorBanner};

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let session = use_session();
    let location = use_location();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let role = use_state(|| Role::Customer);
    let local_error = use_state(|| None::<String>);

    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    // Registro correcto: a la home del rol
    {
        let navigator = location.navigator.clone();
        let role = session.session.role();
        use_effect_with(role, move |role| {
            if let Some(role) = role {
                navigator.replace(&Route::home_for(*role));
            }
            || ()
        });
    }

    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            if let Some(parsed) = Role::parse(&select_value(&e)) {
                role.set(parsed);
            }
        })
    };

    let onsubmit = {
        let register = session.register.clone();
        let (name, email, password, confirm, role, local_error) = (
            name.clone(),
            email.clone(),
            password.clone(),
            confirm.clone(),
            role.clone(),
            local_error.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *password != *confirm {
                local_error.set(Some("Passwords do not match".to_string()));
                return;
            }
            local_error.set(None);
            register.emit(RegisterInput {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                role: *role,
            });
        })
    };

    let loading = session.session.is_loading();
    let error = (*local_error)
        .clone()
        .or_else(|| session.session.error().map(str::to_string));

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>{"Create Account"}</h1>
                </div>

                <ErrorBanner message={error} />

                <form class="auth-form" {onsubmit}>
                    <div class="form-group">
                        <label for="name">{"Full name"}</label>
                        <input id="name" type="text" value={(*name).clone()} oninput={bind_input(&name)} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" value={(*email).clone()} oninput={bind_input(&email)} />
                    </div>
                    <div class="form-group">
                        <label for="role">{"Account type"}</label>
                        <select id="role" onchange={on_role}>
                            <option value="customer" selected={*role == Role::Customer}>{"Customer"}</option>
                            <option value="agent" selected={*role == Role::Agent}>{"Delivery Agent"}</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            placeholder={format!("At least {} characters", CONFIG.min_password_length)}
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirm">{"Confirm password"}</label>
                        <input id="confirm" type="password" value={(*confirm).clone()} oninput={bind_input(&confirm)} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={loading}>
                        { if loading { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <p class="auth-footer">
                    {"Already registered? "}
                    <Link to={Route::Login}>{"Login"}</Link>
                </p>
            </div>
        </div>
    }
}
