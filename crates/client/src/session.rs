use shared_types::{AppError, AuthResponse, LoginRequest, RegisterRequest, Session};
use validator::Validate;

use crate::api::AuthBackend;
use crate::token_store::SharedTokenStore;

/// Session lifecycle: restore at startup, then login, register or logout.
///
/// Holds no session value itself. Each operation returns the new `Session`
/// and the caller publishes it; a failed login or register leaves both the
/// persisted token and the caller's session untouched.
#[derive(Clone)]
pub struct SessionStore<B> {
    backend: B,
    tokens: SharedTokenStore,
}

impl<B: AuthBackend> SessionStore<B> {
    pub fn new(backend: B, tokens: SharedTokenStore) -> Self {
        Self { backend, tokens }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Resolve the startup session from the persisted token.
    ///
    /// A token the backend no longer accepts is cleared, unless a sign-in
    /// replaced it while the check was in flight. Never fails.
    pub async fn restore(&self) -> Session {
        let Some(token) = self.tokens.load() else {
            tracing::debug!("No persisted session token");
            return Session::anonymous();
        };

        match self.backend.fetch_user(&token).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "Session restored");
                Session::signed_in(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted session rejected, clearing token");
                self.tokens.clear_if(&token);
                Session::anonymous()
            }
        }
    }

    /// Exchange credentials for a session. All failures are `Unauthorized`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::unauthorized("Email and password are required"));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .backend
            .authenticate(&request)
            .await
            .map_err(AppError::into_auth_error)?;
        Ok(self.accept(response, "Signed in"))
    }

    /// Create an account and sign in as it.
    ///
    /// Fails with `ValidationError` for fields rejected locally or by the
    /// server, otherwise `Unauthorized`.
    pub async fn register(&self, request: RegisterRequest) -> Result<Session, AppError> {
        request.validate()?;
        let response = self
            .backend
            .create_account(&request)
            .await
            .map_err(AppError::into_registration_error)?;
        Ok(self.accept(response, "Registered"))
    }

    /// Forget the persisted token. Always succeeds.
    pub fn logout(&self) -> Session {
        self.tokens.clear();
        tracing::info!("Signed out");
        Session::anonymous()
    }

    fn accept(&self, response: AuthResponse, event: &str) -> Session {
        self.tokens.save(&response.token);
        tracing::info!(user_id = %response.user.id, role = %response.user.role, "{event}");
        Session::signed_in(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::{MemoryTokenStore, TokenStore};
    use pretty_assertions::assert_eq;
    use shared_types::{authorize, AccessDecision, AppErrorKind, Role, User};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    /// In-memory auth backend: accounts by email, tokens are `token-<id>`.
    #[derive(Default)]
    struct FakeBackend {
        accounts: Mutex<HashMap<String, (String, User)>>,
        offline: bool,
        /// When set, `fetch_user` waits for a notification before answering.
        me_gate: Option<Arc<Notify>>,
    }

    impl FakeBackend {
        fn with_account(email: &str, password: &str, role: Role) -> Self {
            let backend = Self::default();
            backend.insert(email, password, role);
            backend
        }

        fn insert(&self, email: &str, password: &str, role: Role) -> User {
            let mut accounts = self.accounts.lock().unwrap();
            let user = User {
                id: format!("u-{}", accounts.len() + 1),
                name: "Asha".into(),
                email: email.into(),
                phone: "123".into(),
                country: "India".into(),
                city: None,
                role,
                profile_picture: None,
                orphanage_id: None,
            };
            accounts.insert(email.into(), (password.into(), user.clone()));
            user
        }

        fn issue(user: User) -> AuthResponse {
            AuthResponse {
                token: format!("token-{}", user.id),
                user,
            }
        }
    }

    impl AuthBackend for FakeBackend {
        async fn authenticate(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
            if self.offline {
                return Err(AppError::network("connection refused"));
            }
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(&request.email) {
                Some((password, user)) if *password == request.password => Ok(Self::issue(user.clone())),
                _ => Err(AppError::from_response(401, r#"{"detail":"Invalid credentials"}"#)),
            }
        }

        async fn create_account(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
            if self.accounts.lock().unwrap().contains_key(&request.email) {
                return Err(AppError::from_response(400, r#"{"detail":"Email already registered"}"#));
            }
            let user = self.insert(&request.email, &request.password, request.role);
            Ok(Self::issue(user))
        }

        async fn fetch_user(&self, token: &str) -> Result<User, AppError> {
            if let Some(gate) = &self.me_gate {
                gate.notified().await;
            }
            self.accounts
                .lock()
                .unwrap()
                .values()
                .map(|(_, user)| user)
                .find(|user| format!("token-{}", user.id) == token)
                .cloned()
                .ok_or_else(|| AppError::from_response(401, r#"{"detail":"Invalid token"}"#))
        }
    }

    fn store(backend: FakeBackend, tokens: Arc<MemoryTokenStore>) -> SessionStore<FakeBackend> {
        SessionStore::new(backend, tokens)
    }

    #[tokio::test]
    async fn login_sets_user_and_persists_token_for_next_load() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let sessions = store(
            FakeBackend::with_account("asha@example.com", "secret", Role::Donor),
            tokens.clone(),
        );

        let session = sessions.login("asha@example.com", "secret").await.unwrap();
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("asha@example.com"));
        assert_eq!(tokens.load().as_deref(), Some("token-u-1"));

        // A fresh page load restores the same user without credentials.
        let restored = sessions.restore().await;
        assert_eq!(restored, session);
    }

    #[tokio::test]
    async fn invalid_credentials_leave_prior_session_untouched() {
        let tokens = Arc::new(MemoryTokenStore::with_token("token-u-1"));
        let sessions = store(
            FakeBackend::with_account("asha@example.com", "secret", Role::Donor),
            tokens.clone(),
        );

        let err = sessions.login("asha@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");
        assert_eq!(tokens.load().as_deref(), Some("token-u-1"));
    }

    #[tokio::test]
    async fn network_failure_on_login_is_an_auth_error() {
        let backend = FakeBackend {
            offline: true,
            ..Default::default()
        };
        let sessions = store(backend, Arc::new(MemoryTokenStore::new()));
        let err = sessions.login("asha@example.com", "secret").await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Could not reach the server. Please try again.");
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected_without_a_request() {
        let sessions = store(FakeBackend::default(), Arc::new(MemoryTokenStore::new()));
        let err = sessions.login("  ", "").await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn logout_clears_user_and_denies_protected_routes() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let sessions = store(
            FakeBackend::with_account("asha@example.com", "secret", Role::Donor),
            tokens.clone(),
        );
        let session = sessions.login("asha@example.com", "secret").await.unwrap();
        assert_eq!(authorize(&session, Some(&[Role::Donor])), AccessDecision::Allow);

        let session = sessions.logout();
        assert_eq!(session.user(), None);
        assert_eq!(tokens.load(), None);
        assert_eq!(
            authorize(&session, Some(&[Role::Donor])),
            AccessDecision::DenyUnauthenticated
        );
        assert_eq!(sessions.restore().await, Session::anonymous());
    }

    #[tokio::test]
    async fn restore_without_token_is_anonymous() {
        let sessions = store(FakeBackend::default(), Arc::new(MemoryTokenStore::new()));
        assert_eq!(sessions.restore().await, Session::anonymous());
    }

    #[tokio::test]
    async fn restore_with_stale_token_clears_it() {
        let tokens = Arc::new(MemoryTokenStore::with_token("token-gone"));
        let sessions = store(FakeBackend::default(), tokens.clone());
        assert_eq!(sessions.restore().await, Session::anonymous());
        assert_eq!(tokens.load(), None);
    }

    #[tokio::test]
    async fn stale_restore_keeps_token_from_concurrent_login() {
        let gate = Arc::new(Notify::new());
        let backend = FakeBackend {
            me_gate: Some(gate.clone()),
            ..FakeBackend::with_account("asha@example.com", "secret", Role::Donor)
        };
        let tokens = Arc::new(MemoryTokenStore::with_token("stale-token"));
        let sessions = store(backend, tokens.clone());

        // Restore parks on `/auth/me`; the sign-in completes, then releases it.
        let login = async {
            let session = sessions.login("asha@example.com", "secret").await.unwrap();
            gate.notify_one();
            session
        };
        let (restored, signed_in) = tokio::join!(sessions.restore(), login);

        assert_eq!(restored, Session::anonymous());
        assert_eq!(signed_in.role(), Some(Role::Donor));
        assert_eq!(tokens.load().as_deref(), Some("token-u-1"));
    }

    #[test]
    fn clear_if_only_clears_the_expected_token() {
        let tokens = MemoryTokenStore::with_token("fresh-token");
        tokens.clear_if("stale-token");
        assert_eq!(tokens.load().as_deref(), Some("fresh-token"));
        tokens.clear_if("fresh-token");
        assert_eq!(tokens.load(), None);
    }

    #[tokio::test]
    async fn register_signs_in_new_account() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let sessions = store(FakeBackend::default(), tokens.clone());
        let request = RegisterRequest::donor("Ravi", "ravi@example.com", "pw", "98765");

        let session = sessions.register(request).await.unwrap();
        assert_eq!(session.role(), Some(Role::Donor));
        assert!(tokens.load().is_some());
    }

    #[tokio::test]
    async fn register_duplicate_email_is_a_validation_error() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let sessions = store(
            FakeBackend::with_account("asha@example.com", "secret", Role::Donor),
            tokens.clone(),
        );
        let request = RegisterRequest::donor("Asha", "asha@example.com", "pw", "123");

        let err = sessions.register(request).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "Email already registered");
        assert_eq!(tokens.load(), None);
    }

    #[tokio::test]
    async fn register_rejects_invalid_fields_locally() {
        let sessions = store(FakeBackend::default(), Arc::new(MemoryTokenStore::new()));
        let request = RegisterRequest::donor("", "not-an-email", "pw", "123");

        let err = sessions.register(request).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("name"));
    }
}
