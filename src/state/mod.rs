// ============================================================================
// STATE MODULE - Stores con reducer puro + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod parcel_state;
pub mod users_state;
pub mod toast_state;

pub use reactivity::{ReactiveStore, Reducer, SubscriptionId};
pub use session_state::{Lifecycle, Session, SessionAction, SessionStore};
pub use parcel_state::{ParcelAction, ParcelRequest, ParcelState, ParcelStore};
pub use users_state::{UsersAction, UsersRequest, UsersState, UsersStore};
pub use toast_state::{Toast, ToastAction, ToastKind, ToastStore, Toasts};
