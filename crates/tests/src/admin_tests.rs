use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, DonationCreate, OrphanageQuery, VerificationStatus};

use crate::common::{
    signed_in_client, TestBackend, ADMIN_EMAIL, ADMIN_PASSWORD, DONOR_EMAIL, DONOR_PASSWORD,
};

#[tokio::test]
async fn verifying_a_pending_orphanage_lists_it_publicly() {
    let backend = TestBackend::start().await;
    let admin = signed_in_client(&backend, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let pending = backend.orphanage_id("Snehalaya");

    let result = admin
        .verify_orphanage(&pending, VerificationStatus::Verified)
        .await
        .unwrap();
    assert!(result.success);

    let (public, _) = backend.client();
    let query = OrphanageQuery {
        verified: Some(true),
        ..Default::default()
    };
    let verified = public.list_orphanages(&query).await.unwrap();
    assert!(verified.iter().any(|o| o.id == pending));
}

#[tokio::test]
async fn rejecting_is_reflected_in_the_admin_listing() {
    let backend = TestBackend::start().await;
    let admin = signed_in_client(&backend, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let pending = backend.orphanage_id("Snehalaya");

    admin
        .verify_orphanage(&pending, VerificationStatus::Rejected)
        .await
        .unwrap();

    let all = admin.admin_orphanages().await.unwrap();
    let home = all.iter().find(|o| o.id == pending).unwrap();
    assert_eq!(home.verification_status, VerificationStatus::Rejected);
}

#[tokio::test]
async fn donors_cannot_reach_admin_endpoints() {
    let backend = TestBackend::start().await;
    let donor = signed_in_client(&backend, DONOR_EMAIL, DONOR_PASSWORD).await;
    let pending = backend.orphanage_id("Snehalaya");

    let err = donor
        .verify_orphanage(&pending, VerificationStatus::Verified)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Access denied");

    assert_eq!(
        donor.admin_donations().await.unwrap_err().kind,
        AppErrorKind::Forbidden
    );
}

#[tokio::test]
async fn platform_analytics_counts_orphanages_and_transactions() {
    let backend = TestBackend::start().await;
    let donor = signed_in_client(&backend, DONOR_EMAIL, DONOR_PASSWORD).await;
    let id = backend.orphanage_id("Bal Niketan");
    donor
        .create_donation(&DonationCreate::with_default_split(id, 750.0, None, false))
        .await
        .unwrap();

    let admin = signed_in_client(&backend, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let stats = admin.platform_analytics().await.unwrap();
    assert_eq!(stats.total_orphanages, 3);
    assert_eq!(stats.verified_orphanages, 2);
    assert_eq!(stats.pending_orphanages, 1);
    assert_eq!(stats.total_donations, 750.0);
    assert_eq!(stats.total_donors, 1);
    assert_eq!(stats.total_transactions, 1);

    let transactions = admin.admin_donations().await.unwrap();
    assert_eq!(transactions.len(), 1);
}

#[tokio::test]
async fn orphanage_donations_are_listed_for_admins_only() {
    let backend = TestBackend::start().await;
    let donor = signed_in_client(&backend, DONOR_EMAIL, DONOR_PASSWORD).await;
    let asha = backend.orphanage_id("Asha Bhavan");
    let bal = backend.orphanage_id("Bal Niketan");
    for (id, amount) in [(&asha, 400.0), (&bal, 900.0), (&asha, 100.0)] {
        donor
            .create_donation(&DonationCreate::with_default_split(id.clone(), amount, None, false))
            .await
            .unwrap();
    }

    let admin = signed_in_client(&backend, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let received = admin.orphanage_donations(&asha).await.unwrap();
    assert_eq!(received.len(), 2);
    assert!(received.iter().all(|d| d.orphanage_id == asha));

    let err = donor.orphanage_donations(&asha).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}
