pub mod auth_viewmodel;
pub mod parcel_viewmodel;
pub mod users_viewmodel;

pub use auth_viewmodel::{AuthViewModel, SessionBusy};
pub use parcel_viewmodel::ParcelViewModel;
pub use users_viewmodel::UsersViewModel;
