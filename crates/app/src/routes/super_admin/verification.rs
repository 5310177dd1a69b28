use dioxus::prelude::*;
use shared_types::{Orphanage, VerificationStatus};
use shared_ui::{
    use_toast, Button, ButtonVariant, PageHeader, PageSubtitle, PageTitle, SkeletonList,
    ToastOptions,
};

use crate::auth::use_api;
use crate::components::VerificationBadge;
use crate::routes::Route;

/// Toast text after a successful status change.
pub fn verification_message(status: VerificationStatus) -> String {
    let verb = match status {
        VerificationStatus::Verified => "verified",
        VerificationStatus::Rejected => "rejected",
        VerificationStatus::Pending => "reset to pending",
    };
    format!("Orphanage {verb} successfully")
}

/// Review queue of every orphanage, with verify and reject actions.
#[component]
pub fn OrphanageVerification() -> Element {
    let api = use_api();
    let toast = use_toast();

    let list_api = api.clone();
    let mut orphanages = use_resource(move || {
        let api = list_api.clone();
        async move {
            match api.admin_orphanages().await {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load orphanages for verification");
                    Vec::new()
                }
            }
        }
    });

    let set_status = move |orphanage_id: String, status: VerificationStatus| {
        let api = api.clone();
        spawn(async move {
            match api.verify_orphanage(&orphanage_id, status).await {
                Ok(result) if result.success => {
                    tracing::info!(orphanage_id = %orphanage_id, status = status.as_str(), "Verification updated");
                    toast.success(verification_message(status), ToastOptions::new());
                    orphanages.restart();
                }
                Ok(_) => {
                    toast.error("Failed to update verification status".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, orphanage_id = %orphanage_id, "Verification failed");
                    toast.error("Failed to update verification status".to_string(), ToastOptions::new());
                }
            }
        });
    };

    let loaded = orphanages.read().clone();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Orphanage Verification" }
                PageSubtitle { "Review registrations before they appear in the public directory" }
            }
        }

        match loaded {
            None => rsx! { SkeletonList { lines: 5 } },
            Some(list) if list.is_empty() => rsx! {
                div { class: "empty-state", "No orphanages registered yet" }
            },
            Some(list) => rsx! {
                div { class: "table-wrapper",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Location" }
                                th { "Registration" }
                                th { "Status" }
                                th { class: "cell-center", "Actions" }
                            }
                        }
                        tbody {
                            for orphanage in list {
                                VerificationRow {
                                    key: "{orphanage.id}",
                                    orphanage: orphanage.clone(),
                                    on_decide: {
                                        let mut set_status = set_status.clone();
                                        move |(id, status): (String, VerificationStatus)| set_status(id, status)
                                    },
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn VerificationRow(
    orphanage: Orphanage,
    on_decide: EventHandler<(String, VerificationStatus)>,
) -> Element {
    let verify_id = orphanage.id.clone();
    let reject_id = orphanage.id.clone();
    let status = orphanage.verification_status;

    rsx! {
        tr {
            td { class: "cell-strong",
                Link { to: Route::OrphanageProfile { slug: orphanage.slug.clone() }, "{orphanage.name}" }
            }
            td { "{orphanage.location()}" }
            td { "{orphanage.registration_number}" }
            td { VerificationBadge { status } }
            td { class: "cell-center",
                div { class: "row-actions",
                    if status != VerificationStatus::Verified {
                        Button {
                            onclick: move |_| on_decide.call((verify_id.clone(), VerificationStatus::Verified)),
                            "Verify"
                        }
                    }
                    if status != VerificationStatus::Rejected {
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| on_decide.call((reject_id.clone(), VerificationStatus::Rejected)),
                            "Reject"
                        }
                    }
                }
            }
        }
    }
}
