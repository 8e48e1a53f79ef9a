// ============================================================================
// TOAST STATE - Notificaciones efímeras
// ============================================================================

use uuid::Uuid;
use crate::state::reactivity::{ReactiveStore, Reducer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toasts {
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Show(Toast),
    Dismiss(Uuid),
}

impl Reducer for Toasts {
    type Action = ToastAction;

    fn reduce(&self, action: ToastAction) -> Self {
        let mut next = self.clone();
        match action {
            ToastAction::Show(toast) => next.items.push(toast),
            ToastAction::Dismiss(id) => next.items.retain(|t| t.id != id),
        }
        next
    }
}

pub type ToastStore = ReactiveStore<Toasts>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_toast() {
        let first = Toast::new(ToastKind::Success, "Parcel booked");
        let second = Toast::new(ToastKind::Error, "Failed to book parcel");
        assert_ne!(first.id, second.id);

        let state = Toasts::default()
            .reduce(ToastAction::Show(first.clone()))
            .reduce(ToastAction::Show(second.clone()))
            .reduce(ToastAction::Dismiss(first.id));
        assert_eq!(state.items, vec![second]);
    }

    #[test]
    fn dismissing_unknown_id_is_not_a_change() {
        let store = ToastStore::default();
        assert!(!store.dispatch(ToastAction::Dismiss(Uuid::new_v4())));
    }
}
