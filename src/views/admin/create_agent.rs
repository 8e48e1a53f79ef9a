use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::hooks::{use_location, use_toasts, use_users};
use crate::models::CreateAgentRequest;
use crate::routing::Route;
use crate::views::shared::{bind_input, ErrorBanner};

/// Validación local antes de llamar a /users/create-agent
pub fn validate_agent_form(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    min_length: usize,
) -> Result<CreateAgentRequest, String> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err("Name and email are required".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    if password.chars().count() < min_length {
        return Err(format!("Password must be at least {} characters.", min_length));
    }
    Ok(CreateAgentRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

#[function_component(CreateAgentView)]
pub fn create_agent_view() -> Html {
    let users = use_users();
    let toasts = use_toasts();
    let location = use_location();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    let onsubmit = {
        let vm = users.vm.clone();
        let navigator = location.navigator.clone();
        let toasts = toasts.clone();
        let (name, email, password, confirm, local_error) =
            (name.clone(), email.clone(), password.clone(), confirm.clone(), local_error.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match validate_agent_form(&name, &email, &password, &confirm, CONFIG.min_password_length) {
                Ok(request) => request,
                Err(message) => {
                    local_error.set(Some(message));
                    return;
                }
            };
            local_error.set(None);

            let vm = vm.clone();
            let navigator = navigator.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                if vm.create_agent(request).await {
                    toasts.success.emit("Agent created successfully".to_string());
                    navigator.push(&Route::ManageAgents);
                }
            });
        })
    };

    let error = (*local_error).clone().or_else(|| users.state.error.clone());

    html! {
        <div class="page narrow">
            <ErrorBanner message={error} />
            <form class="card-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Full name"}</label>
                    <input id="name" type="text" value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={(*email).clone()} oninput={bind_input(&email)} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input id="password" type="password" value={(*password).clone()} oninput={bind_input(&password)} />
                </div>
                <div class="form-group">
                    <label for="confirm">{"Confirm password"}</label>
                    <input id="confirm" type="password" value={(*confirm).clone()} oninput={bind_input(&confirm)} />
                </div>
                <button type="submit" class="btn btn-primary" disabled={users.state.loading}>
                    { if users.state.loading { "Creating..." } else { "Create Agent" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_form_rules() {
        assert_eq!(
            validate_agent_form("Bob", "b@x.com", "secret1", "secret2", 6),
            Err("Passwords do not match".to_string())
        );
        assert_eq!(
            validate_agent_form("Bob", "b@x.com", "abc", "abc", 6),
            Err("Password must be at least 6 characters.".to_string())
        );
        let request = validate_agent_form(" Bob ", "b@x.com", "secret1", "secret1", 6).unwrap();
        assert_eq!(request.name, "Bob");
    }
}
