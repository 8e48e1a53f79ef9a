// ============================================================================
// SESSION STATE - Estado de autenticación (reducer puro)
// ============================================================================

use crate::models::{Identity, Role, User};
use crate::state::reactivity::{ReactiveStore, Reducer};

/// Ciclo de vida de la verificación de arranque
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Nadie ha pedido todavía verificar la credencial guardada
    #[default]
    Uninitialized,
    /// Verificación de arranque en curso
    Initializing,
    /// Verificación terminada (éxito o fallo). No vuelve atrás.
    Ready,
}

/// Estado de autenticación actual
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    identity: Option<Identity>,
    lifecycle: Lifecycle,
    /// login / register / logout en curso
    request_in_flight: bool,
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    VerifyStarted,
    VerifySucceeded(Identity),
    VerifyFailed,
    LoginStarted,
    LoginSucceeded(Identity),
    LoginFailed(String),
    LogoutStarted,
    LoggedOut,
    ClearError,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.identity.as_ref().map(|identity| &identity.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(Identity::role)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Initializing || self.request_in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn with_identity(&self, identity: Option<Identity>) -> Session {
        Session {
            identity,
            ..self.clone()
        }
    }
}

impl Reducer for Session {
    type Action = SessionAction;

    fn reduce(&self, action: SessionAction) -> Session {
        match action {
            SessionAction::VerifyStarted => {
                if self.lifecycle != Lifecycle::Uninitialized || self.is_loading() {
                    return self.clone();
                }
                Session {
                    lifecycle: Lifecycle::Initializing,
                    ..self.clone()
                }
            }
            SessionAction::VerifySucceeded(identity) => Session {
                lifecycle: Lifecycle::Ready,
                ..self.with_identity(Some(identity))
            },
            SessionAction::VerifyFailed => Session {
                lifecycle: Lifecycle::Ready,
                ..self.with_identity(None)
            },
            SessionAction::LoginStarted | SessionAction::LogoutStarted => {
                if self.is_loading() {
                    return self.clone();
                }
                Session {
                    request_in_flight: true,
                    error: None,
                    ..self.clone()
                }
            }
            SessionAction::LoginSucceeded(identity) => Session {
                request_in_flight: false,
                error: None,
                ..self.with_identity(Some(identity))
            },
            SessionAction::LoginFailed(message) => Session {
                request_in_flight: false,
                error: Some(message),
                ..self.with_identity(None)
            },
            SessionAction::LoggedOut => Session {
                request_in_flight: false,
                error: None,
                ..self.with_identity(None)
            },
            SessionAction::ClearError => Session {
                error: None,
                ..self.clone()
            },
        }
    }
}

/// Store de sesión compartido por contexto
pub type SessionStore = ReactiveStore<Session>;
