use client::{ApiClient, SessionStore};
use dioxus::prelude::*;
use shared_types::{Role, Session, User};

/// Process-wide session. Starts `Loading`, is resolved once at startup and
/// afterwards changes only through sign-in, sign-up and logout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::Loading),
        }
    }

    /// The signed-in user, if any. Never waits on the network.
    pub fn current_user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(session);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Session lifecycle service provided by `App`.
pub fn use_sessions() -> SessionStore<ApiClient> {
    use_context::<SessionStore<ApiClient>>()
}

/// REST client provided by `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
