use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Placeholder neutro mientras se decide qué mostrar
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-screen" role="status" aria-busy="true">
            <div class="spinner"></div>
            if let Some(message) = &props.message {
                <p>{message.clone()}</p>
            }
        </div>
    }
}
