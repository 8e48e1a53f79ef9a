use yew::prelude::*;
use crate::hooks::use_app_context;
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

/// Enlace interno: pushState en vez de recargar la página
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let context = use_app_context();

    let onclick = {
        let navigator = context.navigator.clone();
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.push(&to);
        })
    };

    html! {
        <a href={props.to.to_path()} class={props.classes.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}
