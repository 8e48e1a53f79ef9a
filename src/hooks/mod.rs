pub mod session_context;
pub mod use_store;
pub mod use_session;
pub mod use_location;
pub mod use_parcels;
pub mod use_toasts;

pub use session_context::{use_app_context, AppContext, AppContextProvider};
pub use use_store::use_store;
pub use use_session::{use_session, RegisterInput, UseSessionHandle};
pub use use_location::{use_location, UseLocationHandle};
pub use use_parcels::{use_parcels, use_users, UseParcelsHandle, UseUsersHandle};
pub use use_toasts::{use_toasts, UseToastsHandle};
