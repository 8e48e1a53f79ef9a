// ============================================================================
// USE SESSION HOOK - Sesión + operaciones de auth como Callbacks
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::hooks::session_context::use_app_context;
use crate::hooks::use_store::use_store;
use crate::hooks::use_toasts::use_toasts;
use crate::models::Role;
use crate::state::Session;
use crate::viewmodels::AuthViewModel;

/// Datos del formulario de registro
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: Rc<Session>,
    pub verify: Callback<()>,
    pub login: Callback<(String, String)>,
    pub register: Callback<RegisterInput>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let context = use_app_context();
    let session = use_store(context.session.clone());
    let toasts = use_toasts();

    let verify = {
        let store = context.session.clone();
        Callback::from(move |_| {
            let vm = AuthViewModel::new(store.clone());
            spawn_local(async move {
                vm.verify().await;
            });
        })
    };

    let login = {
        let store = context.session.clone();
        Callback::from(move |(email, password): (String, String)| {
            let vm = AuthViewModel::new(store.clone());
            spawn_local(async move {
                vm.login(&email, &password).await;
            });
        })
    };

    let register = {
        let store = context.session.clone();
        Callback::from(move |input: RegisterInput| {
            let vm = AuthViewModel::new(store.clone());
            spawn_local(async move {
                vm.register(&input.name, &input.email, &input.password, input.role).await;
            });
        })
    };

    let logout = {
        let context = context.clone();
        let notify = toasts.error.clone();
        Callback::from(move |_| {
            let vm = AuthViewModel::new(context.session.clone());
            match vm.sign_out(&context.parcels, &context.users, &context.navigator) {
                Ok(Some(token)) => spawn_local(async move {
                    vm.invalidate_remote(&token).await;
                }),
                Ok(None) => {}
                Err(busy) => notify.emit(busy.to_string()),
            }
        })
    };

    let clear_error = {
        let store = context.session.clone();
        Callback::from(move |_| AuthViewModel::new(store.clone()).clear_error())
    };

    UseSessionHandle {
        session,
        verify,
        login,
        register,
        logout,
        clear_error,
    }
}
