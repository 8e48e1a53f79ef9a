use std::rc::Rc;
use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::hooks::session_context::use_app_context;
use crate::hooks::use_store::use_store;
use crate::state::{Toast, ToastAction, ToastKind, ToastStore, Toasts};

#[derive(Clone, PartialEq)]
pub struct UseToastsHandle {
    pub toasts: Rc<Toasts>,
    pub success: Callback<String>,
    pub error: Callback<String>,
    pub dismiss: Callback<Uuid>,
}

fn show(store: &ToastStore, kind: ToastKind, message: String) {
    let toast = Toast::new(kind, message);
    let id = toast.id;
    store.dispatch(ToastAction::Show(toast));

    let store = store.clone();
    Timeout::new(CONFIG.toast_duration_ms, move || {
        store.dispatch(ToastAction::Dismiss(id));
    })
    .forget();
}

#[hook]
pub fn use_toasts() -> UseToastsHandle {
    let context = use_app_context();
    let toasts = use_store(context.toasts.clone());

    let success = {
        let store = context.toasts.clone();
        Callback::from(move |message: String| show(&store, ToastKind::Success, message))
    };
    let error = {
        let store = context.toasts.clone();
        Callback::from(move |message: String| show(&store, ToastKind::Error, message))
    };
    let dismiss = {
        let store = context.toasts.clone();
        Callback::from(move |id: Uuid| {
            store.dispatch(ToastAction::Dismiss(id));
        })
    };

    UseToastsHandle {
        toasts,
        success,
        error,
        dismiss,
    }
}
