pub mod form;

pub use form::{bind_input, bind_textarea, select_value, ErrorBanner, StatCard};
