// ============================================================================
// REACTIVITY - Store con reducer puro + subscribers
// ============================================================================
// Las vistas leen snapshots y escriben SOLO via dispatch(action).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Transición pura (state, action) -> nuevo state
pub trait Reducer: Clone + PartialEq + 'static {
    type Action;

    fn reduce(&self, action: Self::Action) -> Self;
}

type Listener = Rc<dyn Fn()>;

/// Identificador devuelto por `subscribe`, necesario para desuscribirse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Store reactivo compartido (Rc) entre componentes del mismo hilo
pub struct ReactiveStore<S: Reducer> {
    value: Rc<RefCell<Rc<S>>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Listener)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<S: Reducer> ReactiveStore<S> {
    pub fn new(value: S) -> Self {
        Self {
            value: Rc::new(RefCell::new(Rc::new(value))),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Snapshot inmutable del estado actual
    pub fn snapshot(&self) -> Rc<S> {
        self.value.borrow().clone()
    }

    /// Aplica la acción. Devuelve `true` si el estado cambió.
    ///
    /// Como todo corre en un único hilo, un `true` es una reserva atómica:
    /// quien lo recibe es el único que vio esa transición.
    pub fn dispatch(&self, action: S::Action) -> bool {
        let changed = {
            let mut current = self.value.borrow_mut();
            let next = current.reduce(action);
            if next == **current {
                false
            } else {
                *current = Rc::new(next);
                true
            }
        };
        if changed {
            self.notify();
        }
        changed
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Copia para que un listener pueda (des)suscribirse sin re-borrow
        let listeners: Vec<Listener> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl<S: Reducer> Clone for ReactiveStore<S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

/// Dos handles son iguales si apuntan al mismo store (para Yew context)
impl<S: Reducer> PartialEq for ReactiveStore<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl<S: Reducer + Default> Default for ReactiveStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Default, Debug)]
    struct Counter(u32);

    enum CounterAction {
        Add(u32),
        Noop,
    }

    impl Reducer for Counter {
        type Action = CounterAction;

        fn reduce(&self, action: CounterAction) -> Self {
            match action {
                CounterAction::Add(n) => Counter(self.0 + n),
                CounterAction::Noop => self.clone(),
            }
        }
    }

    #[test]
    fn dispatch_reports_change_and_notifies() {
        let store = ReactiveStore::new(Counter::default());
        let hits = Rc::new(Cell::new(0));
        let hits_in = hits.clone();
        store.subscribe(move || hits_in.set(hits_in.get() + 1));

        assert!(store.dispatch(CounterAction::Add(2)));
        assert!(!store.dispatch(CounterAction::Noop));
        assert_eq!(store.snapshot().0, 2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn clones_share_state_and_unsubscribe_works() {
        let store = ReactiveStore::new(Counter::default());
        let other = store.clone();
        let id = other.subscribe(|| {});
        assert_eq!(store.subscriber_count(), 1);

        other.dispatch(CounterAction::Add(1));
        assert_eq!(store.snapshot().0, 1);
        assert!(store == other);

        store.unsubscribe(id);
        assert_eq!(other.subscriber_count(), 0);
    }
}
