pub mod route;
pub mod guard;
pub mod navigator;

pub use route::{Route, Zone};
pub use guard::{decide, needs_verification, post_login_target, GuardDecision, Redirect};
pub use navigator::{Location, LocationAction, LocationStore, Navigator};
