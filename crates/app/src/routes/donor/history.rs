use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use dioxus_free_icons::Icon;
use shared_types::{DonationCategory, DonationReceipt};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, PageTitle, SkeletonList, ToastOptions,
};

use crate::auth::use_api;
use crate::components::PaymentBadge;
use crate::format_helpers::{format_datetime, format_inr};

/// Every donation the signed-in donor has made, newest first.
#[component]
pub fn DonorHistory() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut receipt = use_signal(|| None::<DonationReceipt>);

    let list_api = api.clone();
    let donations = use_resource(move || {
        let api = list_api.clone();
        async move { api.my_donations().await }
    });

    let open_receipt = move |donation_id: String| {
        let api = api.clone();
        spawn(async move {
            match api.donation_receipt(&donation_id).await {
                Ok(r) => receipt.set(Some(r)),
                Err(e) => {
                    tracing::warn!(error = %e, donation_id = %donation_id, "Failed to load receipt");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    let loaded = donations.read().clone();

    rsx! {
        PageHeader {
            PageTitle { "Donation History" }
        }

        if let Some(r) = receipt() {
            ReceiptCard { receipt: r, on_close: move |_| receipt.set(None) }
        }

        match loaded {
            None => rsx! { SkeletonList { lines: 5 } },
            Some(Err(e)) => rsx! {
                p { class: "error-text", "{e.friendly_message()}" }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "empty-state", "No donations yet" }
            },
            Some(Ok(list)) => rsx! {
                div { class: "table-wrapper",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Orphanage" }
                                th { "Amount" }
                                th { "Status" }
                                th { class: "cell-center", "Receipt" }
                            }
                        }
                        tbody {
                            for donation in list {
                                tr { key: "{donation.id}",
                                    td { "{format_datetime(&donation.created_at)}" }
                                    td { class: "cell-strong",
                                        {donation.orphanage_name.clone().unwrap_or_default()}
                                    }
                                    td { class: "donation-amount", "{format_inr(donation.amount)}" }
                                    td { PaymentBadge { status: donation.payment_status } }
                                    td { class: "cell-center",
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let mut open_receipt = open_receipt.clone();
                                                let id = donation.id.clone();
                                                move |_| open_receipt(id.clone())
                                            },
                                            Icon { icon: LdDownload, width: 16, height: 16 }
                                        }
                                    }
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
fn ReceiptCard(receipt: DonationReceipt, on_close: EventHandler<MouseEvent>) -> Element {
    let donation = &receipt.donation;
    let orphanage = receipt
        .orphanage
        .as_ref()
        .map(|o| o.name.clone())
        .or_else(|| donation.orphanage_name.clone())
        .unwrap_or_default();

    rsx! {
        Card { class: "receipt-card",
            CardHeader {
                CardTitle { "Donation Receipt" }
                CardDescription { "Reference {donation.reference()}" }
            }
            CardContent {
                dl { class: "receipt-details",
                    dt { "Donor" }
                    dd { "{receipt.donor.name} ({receipt.donor.email})" }
                    dt { "Orphanage" }
                    dd { "{orphanage}" }
                    dt { "Date" }
                    dd { "{format_datetime(&donation.created_at)}" }
                    dt { "Amount" }
                    dd { "{format_inr(donation.amount)}" }
                    for (key, amount) in donation.breakdown.iter() {
                        dt { key: "{key}", "{DonationCategory::label_for_key(key)}" }
                        dd { "{format_inr(*amount)}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |evt| on_close.call(evt),
                    "Close"
                }
            }
        }
    }
}
