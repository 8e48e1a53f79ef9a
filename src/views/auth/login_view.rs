// ============================================================================
// LOGIN VIEW
// ============================================================================

use yew::prelude::*;
use crate::components::Link;
use crate::hooks::{use_location, use_session};
use crate::routing::{post_login_target, Route};
use crate::views::shared::{bind_input, ErrorBanner};

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session();
    let location = use_location();
    let email = use_state(String::new);
    let password = use_state(String::new);

    // Error de un intento anterior: no arrastrarlo al volver a la pantalla
    {
        let clear_error = session.clear_error.clone();
        use_effect_with((), move |_| {
            clear_error.emit(());
            || ()
        });
    }

    // Ya autenticado (login correcto o credencial verificada): salir de aquí
    {
        let navigator = location.navigator.clone();
        let from = location.location.from.clone();
        let current = session.session.clone();
        use_effect_with(session.session.is_authenticated(), move |authenticated| {
            if *authenticated {
                if let Some(target) = post_login_target(&current, from.as_deref()) {
                    log::info!("🔐 [LOGIN] Sesión activa, navegando a {}", target.to_path());
                    navigator.replace(&target);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let login = session.login.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login.emit(((*email).clone(), (*password).clone()));
        })
    };

    let loading = session.session.is_loading();
    let error = session.session.error().map(str::to_string);

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <div class="logo-icon">{"📦"}</div>
                    <h1>{"Courier Login"}</h1>
                    <p>{"Sign in to manage your parcels"}</p>
                </div>

                <ErrorBanner message={error} on_dismiss={session.clear_error.clone()} />

                <form class="auth-form" {onsubmit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={loading}>
                        { if loading { "Signing in..." } else { "Login" } }
                    </button>
                </form>

                <p class="auth-footer">
                    {"Don't have an account? "}
                    <Link to={Route::Register}>{"Register"}</Link>
                </p>
            </div>
        </div>
    }
}
