use client::TokenStore;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, RegisterRequest, Role};

use crate::common::{TestBackend, DONOR_EMAIL};

#[tokio::test]
async fn register_signs_in_as_new_account() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();

    let request = RegisterRequest::donor("Ravi Kumar", "ravi@example.com", "s3cret", "9000000000");
    let session = backend
        .sessions(tokens.clone())
        .register(request)
        .await
        .unwrap();

    let user = session.user().unwrap();
    assert_eq!(user.name, "Ravi Kumar");
    assert_eq!(user.role, Role::Donor);
    assert!(tokens.load().is_some());
}

#[tokio::test]
async fn orphanage_admin_can_register() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();

    let request = RegisterRequest {
        role: Role::OrphanageAdmin,
        ..RegisterRequest::donor("Priya", "priya@home.org", "s3cret", "9000000001")
    };
    let session = backend.sessions(tokens).register(request).await.unwrap();
    assert_eq!(session.role(), Some(Role::OrphanageAdmin));
    assert_eq!(
        shared_types::landing_path(session.role()),
        "/orphanage-admin/dashboard"
    );
}

#[tokio::test]
async fn duplicate_email_is_a_validation_error() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();

    let request = RegisterRequest::donor("Someone", DONOR_EMAIL, "s3cret", "9000000002");
    let err = backend
        .sessions(tokens.clone())
        .register(request)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, "Email already registered");
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn locally_invalid_form_never_creates_an_account() {
    let backend = TestBackend::start().await;
    let (_, tokens) = backend.client();

    let request = RegisterRequest::donor("", "not-an-email", "s3cret", "9000000003");
    let err = backend
        .sessions(tokens)
        .register(request)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("name"));

    assert_eq!(backend.state.lock().unwrap().account_count(), 2);
}
