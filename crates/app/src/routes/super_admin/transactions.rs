use dioxus::prelude::*;
use shared_types::filter_by_reference;
use shared_ui::{Input, PageHeader, PageTitle, SkeletonList};

use crate::auth::use_api;
use crate::components::PaymentBadge;
use crate::format_helpers::{format_datetime, format_inr};

/// Every donation on the platform, searchable by gateway reference.
#[component]
pub fn TransactionMonitoring() -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);

    let donations = use_resource(move || {
        let api = api.clone();
        async move {
            match api.admin_donations().await {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load transactions");
                    Vec::new()
                }
            }
        }
    });

    let loaded = donations.read().clone();

    rsx! {
        PageHeader {
            PageTitle { "Transaction Monitoring" }
        }

        div { class: "search-bar",
            Input {
                placeholder: "Search by transaction ID...",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }
        }

        match loaded {
            None => rsx! { SkeletonList { lines: 6 } },
            Some(all) => {
                let query = search();
                let shown = filter_by_reference(&all, &query);
                rsx! {
                    p { class: "results-count", "{shown.len()} of {all.len()} transactions" }
                    div { class: "table-wrapper",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Transaction ID" }
                                    th { "Amount" }
                                    th { "Status" }
                                    th { "Orphanage ID" }
                                }
                            }
                            tbody {
                                if shown.is_empty() {
                                    tr {
                                        td { colspan: "5", class: "cell-center muted", "No transactions found" }
                                    }
                                }
                                for donation in shown {
                                    tr { key: "{donation.id}",
                                        td { "{format_datetime(&donation.created_at)}" }
                                        td { class: "cell-mono", "{donation.reference()}" }
                                        td { class: "donation-amount", "{format_inr(donation.amount)}" }
                                        td { PaymentBadge { status: donation.payment_status } }
                                        td { class: "cell-mono", "{donation.orphanage_id}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
