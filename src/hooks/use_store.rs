use std::rc::Rc;
use yew::prelude::*;
use crate::state::{ReactiveStore, Reducer};

/// Snapshot del store; el componente se re-renderiza en cada cambio.
#[hook]
pub fn use_store<S: Reducer>(store: ReactiveStore<S>) -> Rc<S> {
    let update = use_force_update();
    let rendered = store.snapshot();

    {
        let rendered = rendered.clone();
        use_effect_with(store, move |store| {
            let listener = update.clone();
            let id = store.subscribe(move || listener.force_update());
            // Cambio entre el render y la suscripción
            if !Rc::ptr_eq(&rendered, &store.snapshot()) {
                update.force_update();
            }
            let store = store.clone();
            move || store.unsubscribe(id)
        });
    }

    rendered
}
