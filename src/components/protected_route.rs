// ============================================================================
// PROTECTED ROUTE - Aplica el guard a una vista
// ============================================================================

use yew::prelude::*;
use crate::components::loading::Loading;
use crate::hooks::{use_location, use_session};
use crate::models::Role;
use crate::routing::{decide, needs_verification, GuardDecision};

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    /// Vacío = cualquier rol autenticado
    #[prop_or_default]
    pub allowed_roles: &'static [Role],
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();
    let location = use_location();

    // Paso 1: verificación de arranque (el store descarta los duplicados)
    {
        let pending = needs_verification(&session.session);
        let verify = session.verify.clone();
        use_effect_with(pending, move |pending| {
            if *pending {
                verify.emit(());
            }
            || ()
        });
    }

    let decision = decide(&session.session, props.allowed_roles, &location.location.path);

    // Las redirecciones se aplican fuera del render
    {
        let navigator = location.navigator.clone();
        use_effect_with(decision.clone(), move |decision| {
            if let GuardDecision::Redirect(redirect) = decision {
                log::info!("🔐 [GUARD] Redirigiendo a {}", redirect.to.to_path());
                navigator.redirect(redirect);
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::Wait | GuardDecision::Redirect(_) => html! { <Loading /> },
    }
}
