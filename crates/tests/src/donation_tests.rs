use pretty_assertions::assert_eq;
use shared_types::{
    filter_by_reference, AppErrorKind, DonationCreate, DonorSummary, PaymentStatus,
};

use crate::common::{signed_in_client, TestBackend, DONOR_EMAIL, DONOR_PASSWORD};

#[tokio::test]
async fn donation_is_split_with_the_default_breakdown() {
    let backend = TestBackend::start().await;
    let api = signed_in_client(&backend, DONOR_EMAIL, DONOR_PASSWORD).await;
    let orphanage_id = backend.orphanage_id("Asha Bhavan");

    let payload = DonationCreate::with_default_split(
        orphanage_id.clone(),
        1000.0,
        Some("For the kids".into()),
        false,
    );
    let donation = api.create_donation(&payload).await.unwrap();

    assert_eq!(donation.orphanage_id, orphanage_id);
    assert_eq!(donation.payment_status, PaymentStatus::Completed);
    assert_eq!(donation.breakdown.get("MEALS"), Some(&500.0));
    assert_eq!(donation.breakdown.get("EDUCATION"), Some(&300.0));
    assert_eq!(donation.breakdown.get("HEALTHCARE"), Some(&200.0));
    assert_eq!(donation.message.as_deref(), Some("For the kids"));

    let home = api.get_orphanage("asha-bhavan").await.unwrap();
    assert_eq!(home.total_donations, 1000.0);
}

#[tokio::test]
async fn my_donations_feed_the_donor_summary() {
    let backend = TestBackend::start().await;
    let api = signed_in_client(&backend, DONOR_EMAIL, DONOR_PASSWORD).await;
    let first = backend.orphanage_id("Asha Bhavan");
    let second = backend.orphanage_id("Bal Niketan");

    for (id, amount) in [(&first, 500.0), (&first, 250.0), (&second, 1200.0)] {
        let payload = DonationCreate::with_default_split(id.clone(), amount, None, true);
        api.create_donation(&payload).await.unwrap();
    }

    let mine = api.my_donations().await.unwrap();
    let summary = DonorSummary::from_donations(&mine);
    assert_eq!(summary.donation_count, 3);
    assert_eq!(summary.total_donated, 1950.0);
    assert_eq!(summary.orphanages_supported, 2);
    assert!(mine.iter().all(|d| d.donor_name.is_none()));
    assert!(mine.iter().all(|d| d.orphanage_name.is_some()));
}

#[tokio::test]
async fn gateway_reference_search_finds_the_transaction() {
    let backend = TestBackend::start().await;
    let api = signed_in_client(&backend, DONOR_EMAIL, DONOR_PASSWORD).await;
    let id = backend.orphanage_id("Asha Bhavan");

    let a = api
        .create_donation(&DonationCreate::with_default_split(id.clone(), 100.0, None, false))
        .await
        .unwrap();
    api.create_donation(&DonationCreate::with_default_split(id, 200.0, None, false))
        .await
        .unwrap();

    let mine = api.my_donations().await.unwrap();
    let reference = a.gateway_reference.clone().unwrap().to_lowercase();
    let hits = filter_by_reference(&mine, &reference);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, a.id);
}

#[tokio::test]
async fn donating_requires_a_session() {
    let backend = TestBackend::start().await;
    let (api, _) = backend.client();
    let id = backend.orphanage_id("Asha Bhavan");

    let err = api
        .create_donation(&DonationCreate::with_default_split(id, 100.0, None, false))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(backend.state.lock().unwrap().donations.is_empty());
}
