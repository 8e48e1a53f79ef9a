use yew::prelude::*;
use crate::hooks::use_toasts;

/// Pila de notificaciones (se auto-descartan)
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let handle = use_toasts();

    html! {
        <div class="toast-container">
            { for handle.toasts.items.iter().map(|toast| {
                let onclick = {
                    let dismiss = handle.dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| dismiss.emit(id))
                };
                html! {
                    <div key={toast.id.to_string()} class={toast.kind.css_class()} {onclick}>
                        {toast.message.clone()}
                    </div>
                }
            }) }
        </div>
    }
}
