// ============================================================================
// GUARD - Decisión pura: ¿render, esperar o redirigir?
// ============================================================================
// El orden importa: "initialized" se comprueba antes que "authenticated" para
// no mandar a /login a quien tiene una credencial válida aún sin verificar.
// ============================================================================

use crate::models::Role;
use crate::routing::route::Route;
use crate::state::{Lifecycle, Session};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    /// Ubicación pedida originalmente (solo para redirecciones a login)
    pub from: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Placeholder neutro: verificación pendiente o petición en curso
    Wait,
    Redirect(Redirect),
    Render,
}

/// Paso 1: ¿hay que lanzar la verificación de arranque?
pub fn needs_verification(session: &Session) -> bool {
    match session.lifecycle() {
        Lifecycle::Uninitialized => !session.is_loading(),
        Lifecycle::Initializing | Lifecycle::Ready => false,
    }
}

/// Pasos 2-5
pub fn decide(session: &Session, allowed_roles: &[Role], location: &str) -> GuardDecision {
    if !session.is_initialized() || session.is_loading() {
        return GuardDecision::Wait;
    }

    let Some(role) = session.role() else {
        return GuardDecision::Redirect(Redirect {
            to: Route::Login,
            from: Some(location.to_string()),
        });
    };

    if !allowed_roles.is_empty() && !allowed_roles.contains(&role) {
        return GuardDecision::Redirect(Redirect {
            to: Route::home_for(role),
            from: None,
        });
    }

    GuardDecision::Render
}

/// Destino tras un login correcto: `from` si el guard lo dejaría pasar, si no la home del rol
pub fn post_login_target(session: &Session, from: Option<&str>) -> Option<Route> {
    let role = session.role()?;
    let requested = from
        .map(Route::recognize)
        .filter(|route| route.zone().is_guarded() && *route != Route::Root);

    match requested {
        Some(route) if decide(session, route.allowed_roles(), &route.to_path()) == GuardDecision::Render => {
            Some(route)
        }
        _ => Some(Route::home_for(role)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Reducer, SessionAction, SessionStore};
    use crate::test_support::identity;

    fn ready(role: Option<Role>) -> Session {
        let session = Session::default().reduce(SessionAction::VerifyStarted);
        match role {
            Some(role) => session.reduce(SessionAction::VerifySucceeded(identity("1", role))),
            None => session.reduce(SessionAction::VerifyFailed),
        }
    }

    #[test]
    fn uninitialized_waits_instead_of_redirecting() {
        let session = Session::default();
        assert!(needs_verification(&session));
        for route in [Route::Reports, Route::AgentDashboard, Route::BookParcel, Route::Root] {
            assert_eq!(
                decide(&session, route.allowed_roles(), &route.to_path()),
                GuardDecision::Wait
            );
        }
    }

    #[test]
    fn initializing_waits_and_does_not_retrigger() {
        let session = Session::default().reduce(SessionAction::VerifyStarted);
        assert!(!needs_verification(&session));
        assert_eq!(decide(&session, &[Role::Customer], "/customer"), GuardDecision::Wait);
    }

    #[test]
    fn login_in_flight_waits() {
        let session = ready(None).reduce(SessionAction::LoginStarted);
        assert_eq!(decide(&session, &[], "/"), GuardDecision::Wait);
    }

    #[test]
    fn unauthenticated_redirects_to_login_with_origin() {
        let session = ready(None);
        assert!(!needs_verification(&session));
        assert_eq!(
            decide(&session, &[Role::Admin], "/admin/reports"),
            GuardDecision::Redirect(Redirect {
                to: Route::Login,
                from: Some("/admin/reports".into()),
            })
        );
    }

    #[test]
    fn wrong_role_goes_home_not_to_login() {
        let session = ready(Some(Role::Agent));
        assert_eq!(
            decide(&session, &[Role::Admin], "/admin/dashboard"),
            GuardDecision::Redirect(Redirect { to: Route::AgentDashboard, from: None })
        );
        let customer = ready(Some(Role::Customer));
        assert_eq!(
            decide(&customer, &[Role::Agent], "/agent/qr-scanner"),
            GuardDecision::Redirect(Redirect { to: Route::CustomerDashboard, from: None })
        );
    }

    #[test]
    fn empty_allow_list_renders_any_role() {
        for role in [Role::Admin, Role::Agent, Role::Customer] {
            assert_eq!(decide(&ready(Some(role)), &[], "/"), GuardDecision::Render);
        }
    }

    #[test]
    fn startup_scenario_triggers_single_verify() {
        let store = SessionStore::default();
        let mut verify_calls = 0;

        // Dos renders del guard antes de que llegue la respuesta
        for _ in 0..2 {
            if needs_verification(&store.snapshot()) && store.dispatch(SessionAction::VerifyStarted) {
                verify_calls += 1;
            }
            assert_eq!(
                decide(&store.snapshot(), &[Role::Customer], "/customer/dashboard"),
                GuardDecision::Wait
            );
        }
        assert_eq!(verify_calls, 1);

        store.dispatch(SessionAction::VerifySucceeded(identity("1", Role::Customer)));
        let session = store.snapshot();
        assert!(session.is_authenticated());
        assert!(session.is_initialized());
        assert!(!session.is_loading());
        assert_eq!(
            decide(&session, &[Role::Customer], "/customer/dashboard"),
            GuardDecision::Render
        );
    }

    #[test]
    fn post_login_prefers_permitted_origin() {
        let agent = ready(Some(Role::Agent));
        assert_eq!(
            post_login_target(&agent, Some("/agent/assigned-parcels")),
            Some(Route::AssignedParcels)
        );
        assert_eq!(post_login_target(&agent, Some("/admin/reports")), Some(Route::AgentDashboard));
        assert_eq!(post_login_target(&agent, Some("/login")), Some(Route::AgentDashboard));
        assert_eq!(post_login_target(&agent, None), Some(Route::AgentDashboard));
        assert_eq!(post_login_target(&ready(None), None), None);
    }
}
