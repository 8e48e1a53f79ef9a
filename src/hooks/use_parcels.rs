use std::rc::Rc;
use yew::prelude::*;
use crate::hooks::session_context::use_app_context;
use crate::hooks::use_store::use_store;
use crate::state::{ParcelState, UsersState};
use crate::viewmodels::{ParcelViewModel, UsersViewModel};

/// Estado de paquetes + viewmodel con el token de la sesión actual
#[derive(Clone)]
pub struct UseParcelsHandle {
    pub state: Rc<ParcelState>,
    pub vm: ParcelViewModel,
}

#[hook]
pub fn use_parcels() -> UseParcelsHandle {
    let context = use_app_context();
    let session = use_store(context.session.clone());
    let state = use_store(context.parcels.clone());
    let token = session.token().unwrap_or_default();
    UseParcelsHandle {
        state,
        vm: ParcelViewModel::new(context.parcels.clone(), token),
    }
}

#[derive(Clone)]
pub struct UseUsersHandle {
    pub state: Rc<UsersState>,
    pub vm: UsersViewModel,
}

#[hook]
pub fn use_users() -> UseUsersHandle {
    let context = use_app_context();
    let session = use_store(context.session.clone());
    let state = use_store(context.users.clone());
    let token = session.token().unwrap_or_default();
    UseUsersHandle {
        state,
        vm: UsersViewModel::new(context.users.clone(), token),
    }
}
