// ============================================================================
// USERS VIEWMODEL - Panel de admin (/users/*)
// ============================================================================

use crate::models::CreateAgentRequest;
use crate::services::{ApiError, UserService};
use crate::state::{UsersAction, UsersRequest, UsersStore};

fn settle<T>(
    store: &UsersStore,
    request: UsersRequest,
    result: Result<T, ApiError>,
    on_ok: impl FnOnce(T) -> UsersAction,
) -> bool {
    match result {
        Ok(value) => {
            store.dispatch(on_ok(value));
            true
        }
        Err(e) => {
            log::error!("❌ [USERS] {:?} falló: {}", request, e);
            store.dispatch(UsersAction::Failed(request, e.backend_message()));
            false
        }
    }
}

#[derive(Clone)]
pub struct UsersViewModel {
    store: UsersStore,
    service: UserService,
}

impl UsersViewModel {
    pub fn new(store: UsersStore, token: &str) -> Self {
        Self {
            store,
            service: UserService::new(token),
        }
    }

    pub async fn load_all(&self) {
        self.store.dispatch(UsersAction::Started(UsersRequest::All));
        let result = self.service.all().await;
        settle(&self.store, UsersRequest::All, result, UsersAction::UsersLoaded);
    }

    pub async fn load_agents(&self) {
        self.store.dispatch(UsersAction::Started(UsersRequest::Agents));
        let result = self.service.agents().await;
        settle(&self.store, UsersRequest::Agents, result, UsersAction::AgentsLoaded);
    }

    pub async fn load_customers(&self) {
        self.store.dispatch(UsersAction::Started(UsersRequest::Customers));
        let result = self.service.customers().await;
        settle(&self.store, UsersRequest::Customers, result, UsersAction::CustomersLoaded);
    }

    pub async fn create_agent(&self, request: CreateAgentRequest) -> bool {
        self.store.dispatch(UsersAction::Started(UsersRequest::CreateAgent));
        let result = self.service.create_agent(&request).await;
        settle(&self.store, UsersRequest::CreateAgent, result, UsersAction::AgentCreated)
    }

    pub fn clear_error(&self) {
        self.store.dispatch(UsersAction::ClearError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};
    use crate::test_support::user;

    #[test]
    fn create_agent_conflict_keeps_backend_message() {
        let store = UsersStore::default();
        store.dispatch(UsersAction::Started(UsersRequest::CreateAgent));
        let ok = settle::<User>(
            &store,
            UsersRequest::CreateAgent,
            Err(ApiError::Http { status: 400, message: Some("Email already exists".into()) }),
            UsersAction::AgentCreated,
        );
        assert!(!ok);
        assert_eq!(store.snapshot().error.as_deref(), Some("Email already exists"));
    }

    #[test]
    fn loaded_customers_replace_list() {
        let store = UsersStore::default();
        settle(
            &store,
            UsersRequest::Customers,
            Ok(vec![user("c1", Role::Customer)]),
            UsersAction::CustomersLoaded,
        );
        let state = store.snapshot();
        assert_eq!(state.customers.len(), 1);
        assert!(!state.loading);
    }
}
