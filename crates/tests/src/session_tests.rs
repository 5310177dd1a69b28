use client::{ApiClient, MemoryTokenStore, SessionStore, SharedTokenStore, TokenStore};
use pretty_assertions::assert_eq;
use shared_types::{authorize, AccessDecision, AppErrorKind, Role};
use std::sync::Arc;

use crate::common::{TestBackend, ADMIN_EMAIL, ADMIN_PASSWORD, DONOR_EMAIL, DONOR_PASSWORD};

#[tokio::test]
async fn login_persists_token_and_survives_reload() {
    let backend = TestBackend::start().await;
    let tokens: SharedTokenStore = Arc::new(MemoryTokenStore::new());

    let session = backend
        .sessions(tokens.clone())
        .login(DONOR_EMAIL, DONOR_PASSWORD)
        .await
        .unwrap();
    assert_eq!(session.role(), Some(Role::Donor));
    assert!(tokens.load().is_some());

    // A fresh store over the same storage resolves the same user.
    let restored = backend.sessions(tokens.clone()).restore().await;
    assert_eq!(restored.user(), session.user());
    assert_eq!(
        authorize(&restored, Some(&[Role::Donor])),
        AccessDecision::Allow
    );
}

#[tokio::test]
async fn login_as_super_admin_lands_on_admin_dashboard() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();

    let session = backend
        .sessions(tokens)
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();
    assert_eq!(session.role(), Some(Role::SuperAdmin));
    assert_eq!(shared_types::landing_path(session.role()), "/admin/dashboard");
}

#[tokio::test]
async fn invalid_credentials_are_unauthorized_and_store_nothing() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();

    let err = backend
        .sessions(tokens.clone())
        .login(DONOR_EMAIL, "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn failed_login_keeps_the_previous_token() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();
    let sessions = backend.sessions(tokens.clone());

    sessions.login(DONOR_EMAIL, DONOR_PASSWORD).await.unwrap();
    let before = tokens.load();

    assert!(sessions.login(ADMIN_EMAIL, "nope").await.is_err());
    assert_eq!(tokens.load(), before);
}

#[tokio::test]
async fn logout_clears_token_and_next_restore_is_anonymous() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();
    let sessions = backend.sessions(tokens.clone());

    sessions.login(DONOR_EMAIL, DONOR_PASSWORD).await.unwrap();
    let session = sessions.logout();

    assert!(!session.is_authenticated());
    assert_eq!(tokens.load(), None);
    let restored = sessions.restore().await;
    assert_eq!(
        authorize(&restored, Some(&[Role::Donor])),
        AccessDecision::DenyUnauthenticated
    );
}

#[tokio::test]
async fn rejected_token_is_cleared_on_restore() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();
    let sessions = backend.sessions(tokens.clone());

    sessions.login(DONOR_EMAIL, DONOR_PASSWORD).await.unwrap();
    backend.state.lock().unwrap().revoke_all_tokens();

    let restored = sessions.restore().await;
    assert!(!restored.is_loading());
    assert!(!restored.is_authenticated());
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn restore_with_unknown_token_is_anonymous() {
    let backend = TestBackend::start().await;
    let tokens: SharedTokenStore = Arc::new(MemoryTokenStore::with_token("forged"));

    let restored = backend.sessions(tokens.clone()).restore().await;
    assert!(!restored.is_authenticated());
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn me_uses_the_stored_token() {
    let backend = TestBackend::start().await;
    let (api, tokens) = backend.client();

    assert_eq!(api.me().await.unwrap_err().kind, AppErrorKind::Unauthorized);

    backend
        .sessions(tokens)
        .login(DONOR_EMAIL, DONOR_PASSWORD)
        .await
        .unwrap();
    assert_eq!(api.me().await.unwrap().email, DONOR_EMAIL);
}

#[tokio::test]
async fn unreachable_backend_fails_login_as_unauthorized() {
    let tokens: SharedTokenStore = Arc::new(MemoryTokenStore::new());
    let config = shared_types::ApiConfig {
        base_url: "http://127.0.0.1:9".into(),
    };
    let offline = SessionStore::new(ApiClient::new(&config, tokens.clone()), tokens.clone());

    let err = offline.login(DONOR_EMAIL, DONOR_PASSWORD).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(tokens.load(), None);
}
