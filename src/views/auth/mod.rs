pub mod login_view;
pub mod register_view;

pub use login_view::LoginView;
pub use register_view::RegisterView;
