// ============================================================================
// AUTH VIEWMODEL - Transiciones de sesión contra el backend
// ============================================================================
// Cada operación reserva el store con un dispatch (Started). Si el dispatch
// no cambió nada, ya hay otra petición en curso y NO se llama al backend.
// Nunca devuelve error: el resultado queda en Session.error.
// ============================================================================

use thiserror::Error;
use crate::config::CONFIG;
use crate::models::{LoginRequest, RegisterRequest, Role};
use crate::routing::{needs_verification, Navigator, Route};
use crate::services::auth_service::{AuthApi, HttpAuthApi};
use crate::state::{ParcelAction, ParcelStore, SessionAction, SessionStore, UsersAction, UsersStore};
use crate::utils::storage::{CredentialStore, LocalCredentialStore};

/// Logout rechazado: hay otra petición de sesión en curso
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("Please wait for the current request to finish")]
pub struct SessionBusy;

#[derive(Clone)]
pub struct AuthViewModel<A: AuthApi = HttpAuthApi, C: CredentialStore = LocalCredentialStore> {
    store: SessionStore,
    api: A,
    credentials: C,
}

impl AuthViewModel {
    /// ViewModel de producción: REST + localStorage
    pub fn new(store: SessionStore) -> Self {
        Self::with(store, HttpAuthApi, LocalCredentialStore)
    }
}

impl<A: AuthApi, C: CredentialStore> AuthViewModel<A, C> {
    pub fn with(store: SessionStore, api: A, credentials: C) -> Self {
        Self { store, api, credentials }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Verificación de arranque. Devuelve `true` si esta llamada la ejecutó.
    pub async fn verify(&self) -> bool {
        if !needs_verification(&self.store.snapshot()) {
            return false;
        }
        if !self.store.dispatch(SessionAction::VerifyStarted) {
            return false;
        }

        let Some(token) = self.credentials.load() else {
            log::info!("ℹ️ [AUTH] Sin credencial guardada");
            self.store.dispatch(SessionAction::VerifyFailed);
            return true;
        };

        match self.api.verify(&token).await {
            Ok(identity) => {
                log::info!("✅ [AUTH] Credencial válida para {} ({})", identity.user.email, identity.role());
                self.store.dispatch(SessionAction::VerifySucceeded(identity));
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Verificación fallida: {}", e);
                // Solo un rechazo explícito invalida la credencial guardada
                if e.is_unauthorized() {
                    self.credentials.clear();
                }
                self.store.dispatch(SessionAction::VerifyFailed);
            }
        }
        true
    }

    pub async fn login(&self, email: &str, password: &str) {
        if !self.store.dispatch(SessionAction::LoginStarted) {
            log::warn!("⚠️ [AUTH] Login ignorado: ya hay una petición en curso");
            return;
        }

        let request = match LoginRequest::validated(email, password) {
            Ok(request) => request,
            Err(message) => {
                self.store.dispatch(SessionAction::LoginFailed(message));
                return;
            }
        };

        match self.api.login(&request).await {
            Ok(identity) => {
                if let Err(e) = self.credentials.save(&identity.token) {
                    log::error!("❌ [AUTH] No se pudo guardar la credencial: {}", e);
                }
                log::info!("✅ [AUTH] Login correcto: {}", identity.user.email);
                self.store.dispatch(SessionAction::LoginSucceeded(identity));
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login fallido: {}", e);
                self.store.dispatch(SessionAction::LoginFailed(e.message_or("Login failed")));
            }
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str, role: Role) {
        if !self.store.dispatch(SessionAction::LoginStarted) {
            return;
        }

        let request = match RegisterRequest::validated(name, email, password, role, CONFIG.min_password_length) {
            Ok(request) => request,
            Err(message) => {
                self.store.dispatch(SessionAction::LoginFailed(message));
                return;
            }
        };

        match self.api.register(&request).await {
            Ok(identity) => {
                if let Err(e) = self.credentials.save(&identity.token) {
                    log::error!("❌ [AUTH] No se pudo guardar la credencial: {}", e);
                }
                self.store.dispatch(SessionAction::LoginSucceeded(identity));
            }
            Err(e) => {
                log::error!("❌ [AUTH] Registro fallido: {}", e);
                self.store.dispatch(SessionAction::LoginFailed(e.message_or("Registration failed")));
            }
        }
    }

    /// Limpieza local síncrona. Devuelve el token a invalidar en el backend.
    pub fn logout(&self) -> Result<Option<String>, SessionBusy> {
        if !self.store.dispatch(SessionAction::LogoutStarted) {
            log::warn!("⚠️ [AUTH] Logout ignorado: ya hay una petición en curso");
            return Err(SessionBusy);
        }
        let token = self.store.snapshot().token().map(str::to_string);
        self.credentials.clear();
        self.store.dispatch(SessionAction::LoggedOut);
        log::info!("👋 [AUTH] Logout");
        Ok(token)
    }

    /// Logout completo: sesión, datos del usuario anterior y vuelta a /login
    pub fn sign_out(
        &self,
        parcels: &ParcelStore,
        users: &UsersStore,
        navigator: &Navigator,
    ) -> Result<Option<String>, SessionBusy> {
        let token = self.logout()?;
        parcels.dispatch(ParcelAction::Reset);
        users.dispatch(UsersAction::Reset);
        navigator.replace(&Route::Login);
        Ok(token)
    }

    /// Invalidación remota best-effort: los fallos solo se registran
    pub async fn invalidate_remote(&self, token: &str) {
        if let Err(e) = self.api.logout(token).await {
            log::warn!("⚠️ [AUTH] Logout remoto fallido (ignorado): {}", e);
        }
    }

    pub fn clear_error(&self) {
        self.store.dispatch(SessionAction::ClearError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use crate::models::Identity;
    use crate::services::ApiError;
    use crate::models::ParcelStatus;
    use crate::routing::LocationStore;
    use crate::state::{ParcelState, UsersState};
    use crate::test_support::{block_on, identity, parcel, user, yield_once};
    use crate::utils::storage::MemoryCredentialStore;

    #[derive(Clone, Default)]
    struct MockAuth {
        verify_calls: Rc<Cell<usize>>,
        login_calls: Rc<Cell<usize>>,
        logout_calls: Rc<Cell<usize>>,
        verify_result: Rc<RefCell<Option<Result<Identity, ApiError>>>>,
        good_password: Rc<RefCell<String>>,
    }

    impl MockAuth {
        fn verifying(result: Result<Identity, ApiError>) -> Self {
            let mock = Self::default();
            *mock.verify_result.borrow_mut() = Some(result);
            mock
        }

        fn accepting(password: &str) -> Self {
            let mock = Self::default();
            *mock.good_password.borrow_mut() = password.to_string();
            mock
        }
    }

    impl AuthApi for MockAuth {
        async fn verify(&self, _token: &str) -> Result<Identity, ApiError> {
            self.verify_calls.set(self.verify_calls.get() + 1);
            yield_once().await;
            self.verify_result
                .borrow()
                .clone()
                .unwrap_or(Err(ApiError::Network("offline".into())))
        }

        async fn login(&self, request: &LoginRequest) -> Result<Identity, ApiError> {
            self.login_calls.set(self.login_calls.get() + 1);
            yield_once().await;
            if request.password == *self.good_password.borrow() {
                Ok(identity("1", Role::Customer))
            } else {
                Err(ApiError::Http { status: 401, message: Some("Invalid credentials".into()) })
            }
        }

        async fn register(&self, request: &RegisterRequest) -> Result<Identity, ApiError> {
            Ok(identity("9", request.role))
        }

        async fn logout(&self, _token: &str) -> Result<(), ApiError> {
            self.logout_calls.set(self.logout_calls.get() + 1);
            yield_once().await;
            Err(ApiError::Network("offline".into()))
        }
    }

    #[test]
    fn startup_verify_runs_once() {
        let mock = MockAuth::verifying(Ok(identity("1", Role::Customer)));
        let vm = AuthViewModel::with(SessionStore::default(), mock.clone(), MemoryCredentialStore::with_token("t"));

        assert!(block_on(vm.verify()));
        assert!(!block_on(vm.verify()));
        assert_eq!(mock.verify_calls.get(), 1);

        let session = vm.store().snapshot();
        assert!(session.is_authenticated());
        assert!(session.is_initialized());
        assert!(!session.is_loading());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("1"));
    }

    #[test]
    fn verify_without_credential_skips_backend() {
        let mock = MockAuth::default();
        let vm = AuthViewModel::with(SessionStore::default(), mock.clone(), MemoryCredentialStore::default());
        assert!(block_on(vm.verify()));
        assert_eq!(mock.verify_calls.get(), 0);
        let session = vm.store().snapshot();
        assert!(session.is_initialized());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn rejected_credential_is_cleared_but_network_failure_keeps_it() {
        let creds = MemoryCredentialStore::with_token("t");
        let vm = AuthViewModel::with(
            SessionStore::default(),
            MockAuth::verifying(Err(ApiError::Http { status: 401, message: None })),
            creds.clone(),
        );
        block_on(vm.verify());
        assert_eq!(creds.load(), None);
        assert!(vm.store().snapshot().is_initialized());

        let creds = MemoryCredentialStore::with_token("t");
        let vm = AuthViewModel::with(SessionStore::default(), MockAuth::default(), creds.clone());
        block_on(vm.verify());
        assert_eq!(creds.load().as_deref(), Some("t"));
        assert!(!vm.store().snapshot().is_authenticated());
    }

    #[test]
    fn wrong_then_right_password() {
        let creds = MemoryCredentialStore::default();
        let vm = AuthViewModel::with(SessionStore::default(), MockAuth::accepting("right"), creds.clone());
        block_on(vm.verify());

        block_on(vm.login("a@b.com", "wrong"));
        let session = vm.store().snapshot();
        assert_eq!(session.error(), Some("Invalid credentials"));
        assert!(!session.is_authenticated());
        assert_eq!(creds.load(), None);

        block_on(vm.login("a@b.com", "right"));
        let session = vm.store().snapshot();
        assert_eq!(session.error(), None);
        assert!(session.is_authenticated());
        assert_eq!(creds.load().as_deref(), Some("token-1"));
    }

    #[test]
    fn empty_fields_fail_without_request() {
        let mock = MockAuth::accepting("right");
        let vm = AuthViewModel::with(SessionStore::default(), mock.clone(), MemoryCredentialStore::default());
        block_on(vm.login("", ""));
        assert_eq!(mock.login_calls.get(), 0);
        assert_eq!(vm.store().snapshot().error(), Some("Email and password are required"));
    }

    #[test]
    fn login_while_verifying_is_ignored() {
        let mock = MockAuth::accepting("right");
        let store = SessionStore::default();
        store.dispatch(SessionAction::VerifyStarted);
        let vm = AuthViewModel::with(store, mock.clone(), MemoryCredentialStore::default());
        block_on(vm.login("a@b.com", "right"));
        assert_eq!(mock.login_calls.get(), 0);
    }

    #[test]
    fn logout_clears_locally_even_if_remote_fails() {
        let mock = MockAuth::verifying(Ok(identity("1", Role::Agent)));
        let creds = MemoryCredentialStore::with_token("t");
        let vm = AuthViewModel::with(SessionStore::default(), mock.clone(), creds.clone());
        block_on(vm.verify());

        let token = vm.logout().unwrap();
        let session = vm.store().snapshot();
        assert_eq!(session.user(), None);
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
        assert!(session.is_initialized());
        assert_eq!(creds.load(), None);

        block_on(vm.invalidate_remote(&token.unwrap()));
        assert_eq!(mock.logout_calls.get(), 1);
        assert!(!vm.store().snapshot().is_authenticated());
    }

    #[test]
    fn sign_out_resets_data_and_returns_to_login() {
        let vm = AuthViewModel::with(
            SessionStore::default(),
            MockAuth::verifying(Ok(identity("1", Role::Admin))),
            MemoryCredentialStore::with_token("t"),
        );
        block_on(vm.verify());

        let parcels = ParcelStore::default();
        parcels.dispatch(ParcelAction::AllLoaded(vec![parcel("p1", ParcelStatus::Booked)]));
        let users = UsersStore::default();
        users.dispatch(UsersAction::AgentsLoaded(vec![user("a1", Role::Agent)]));
        let navigator = Navigator::new(LocationStore::default());
        navigator.replace(&Route::Reports);

        let token = vm.sign_out(&parcels, &users, &navigator);
        assert_eq!(token, Ok(Some("token-1".to_string())));
        assert_eq!(*parcels.snapshot(), ParcelState::default());
        assert_eq!(*users.snapshot(), UsersState::default());
        assert_eq!(navigator.location().snapshot().path, "/login");
        assert!(!vm.store().snapshot().is_authenticated());
    }

    #[test]
    fn sign_out_while_busy_changes_nothing() {
        let store = SessionStore::default();
        store.dispatch(SessionAction::VerifyStarted);
        let vm = AuthViewModel::with(store, MockAuth::default(), MemoryCredentialStore::with_token("t"));

        let parcels = ParcelStore::default();
        parcels.dispatch(ParcelAction::AllLoaded(vec![parcel("p1", ParcelStatus::Booked)]));
        let navigator = Navigator::new(LocationStore::default());
        navigator.replace(&Route::Reports);

        assert_eq!(vm.sign_out(&parcels, &UsersStore::default(), &navigator), Err(SessionBusy));
        assert_eq!(parcels.snapshot().parcels.len(), 1);
        assert_eq!(navigator.location().snapshot().route(), Route::Reports);
        assert_eq!(SessionBusy.to_string(), "Please wait for the current request to finish");
    }

    #[test]
    fn register_authenticates_with_requested_role() {
        let vm = AuthViewModel::with(SessionStore::default(), MockAuth::default(), MemoryCredentialStore::default());
        block_on(vm.register("Bob", "bob@x.com", "secret1", Role::Agent));
        assert_eq!(vm.store().snapshot().role(), Some(Role::Agent));

        let vm = AuthViewModel::with(SessionStore::default(), MockAuth::default(), MemoryCredentialStore::default());
        block_on(vm.register("Bob", "bob@x.com", "123", Role::Agent));
        assert!(vm.store().snapshot().error().is_some());
    }
}
