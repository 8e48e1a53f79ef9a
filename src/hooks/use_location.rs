use std::rc::Rc;
use yew::prelude::*;
use crate::hooks::session_context::use_app_context;
use crate::hooks::use_store::use_store;
use crate::routing::{Location, Navigator};

#[derive(Clone, PartialEq)]
pub struct UseLocationHandle {
    pub location: Rc<Location>,
    pub navigator: Navigator,
}

#[hook]
pub fn use_location() -> UseLocationHandle {
    let context = use_app_context();
    let location = use_store(context.navigator.location().clone());
    UseLocationHandle {
        location,
        navigator: context.navigator.clone(),
    }
}
