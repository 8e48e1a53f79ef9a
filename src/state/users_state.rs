// ============================================================================
// USERS STATE - Listados de usuarios para el panel de admin
// ============================================================================

use crate::models::User;
use crate::state::reactivity::{ReactiveStore, Reducer};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct UsersState {
    pub users: Vec<User>,
    pub agents: Vec<User>,
    pub customers: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsersRequest {
    All,
    Agents,
    Customers,
    CreateAgent,
}

impl UsersRequest {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            UsersRequest::All => "Failed to fetch users",
            UsersRequest::Agents => "Failed to fetch agents",
            UsersRequest::Customers => "Failed to fetch customers",
            UsersRequest::CreateAgent => "Failed to create agent",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UsersAction {
    Started(UsersRequest),
    Failed(UsersRequest, Option<String>),
    UsersLoaded(Vec<User>),
    AgentsLoaded(Vec<User>),
    CustomersLoaded(Vec<User>),
    AgentCreated(User),
    ClearError,
    Reset,
}

impl Reducer for UsersState {
    type Action = UsersAction;

    fn reduce(&self, action: UsersAction) -> Self {
        let mut next = self.clone();
        match action {
            UsersAction::Started(_) => {
                next.loading = true;
                next.error = None;
            }
            UsersAction::Failed(request, message) => {
                next.loading = false;
                next.error = Some(message.unwrap_or_else(|| request.fallback_message().to_string()));
            }
            UsersAction::UsersLoaded(users) => {
                next.loading = false;
                next.users = users;
            }
            UsersAction::AgentsLoaded(agents) => {
                next.loading = false;
                next.agents = agents;
            }
            UsersAction::CustomersLoaded(customers) => {
                next.loading = false;
                next.customers = customers;
            }
            UsersAction::AgentCreated(agent) => {
                next.loading = false;
                next.agents.push(agent);
            }
            UsersAction::ClearError => next.error = None,
            UsersAction::Reset => next = UsersState::default(),
        }
        next
    }
}

pub type UsersStore = ReactiveStore<UsersState>;
