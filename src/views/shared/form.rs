use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Callback de input que escribe el valor en un use_state
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlInputElement>().value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
    })
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    let onclick = props.on_dismiss.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    html! {
        <div class="alert alert-error" role="alert">
            <span>{message}</span>
            if let Some(onclick) = onclick {
                <button class="alert-close" {onclick}>{"×"}</button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub accent: Option<&'static str>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.accent)}>
            <span class="stat-label">{props.label.clone()}</span>
            <span class="stat-value">{props.value.clone()}</span>
        </div>
    }
}
