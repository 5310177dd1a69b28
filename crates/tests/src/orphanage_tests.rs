use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, OrphanageQuery, OrphanageType, VerificationStatus};

use crate::common::TestBackend;

fn names(list: &[shared_types::Orphanage]) -> Vec<&str> {
    list.iter().map(|o| o.name.as_str()).collect()
}

#[tokio::test]
async fn anonymous_visitors_can_list_orphanages() {
    let backend = TestBackend::start().await;
    let (api, _) = backend.client();

    let all = api.list_orphanages(&OrphanageQuery::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn verified_filter_is_sent_to_the_server() {
    let backend = TestBackend::start().await;
    let (api, _) = backend.client();

    let query = OrphanageQuery {
        verified: Some(true),
        ..Default::default()
    };
    let verified = api.list_orphanages(&query).await.unwrap();
    assert_eq!(names(&verified), vec!["Asha Bhavan", "Bal Niketan"]);
    assert!(verified.iter().all(|o| o.is_verified()));
}

#[tokio::test]
async fn city_type_and_search_filters_combine() {
    let backend = TestBackend::start().await;
    let (api, _) = backend.client();

    let query = OrphanageQuery {
        city: Some("Pune".into()),
        kind: Some(OrphanageType::Mixed),
        search: Some("sneha".into()),
        ..Default::default()
    };
    let found = api.list_orphanages(&query).await.unwrap();
    assert_eq!(names(&found), vec!["Snehalaya"]);
    assert_eq!(found[0].verification_status, VerificationStatus::Pending);
}

#[tokio::test]
async fn profile_is_fetched_by_slug() {
    let backend = TestBackend::start().await;
    let (api, _) = backend.client();

    let home = api.get_orphanage("bal-niketan").await.unwrap();
    assert_eq!(home.name, "Bal Niketan");
    assert_eq!(home.monthly_targets.get("MEALS"), Some(&40000.0));
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let backend = TestBackend::start().await;
    let (api, _) = backend.client();

    let err = api.get_orphanage("no-such-home").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Orphanage not found");
}

#[tokio::test]
async fn find_orphanage_matches_on_id() {
    let backend = TestBackend::start().await;
    let (api, _) = backend.client();
    let id = backend.orphanage_id("Snehalaya");

    assert_eq!(api.find_orphanage(&id).await.unwrap().name, "Snehalaya");
    assert_eq!(
        api.find_orphanage("o-missing").await.unwrap_err().kind,
        AppErrorKind::NotFound
    );
}
