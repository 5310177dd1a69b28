use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHeart;
use dioxus_free_icons::Icon;
use shared_types::{Donation, DonorSummary};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, SkeletonList, StatCard,
};

use crate::auth::{use_api, use_auth};
use crate::components::PaymentBadge;
use crate::format_helpers::{format_date, format_inr};
use crate::routes::Route;

/// Donations shown in the "Recent Donations" card.
const RECENT_COUNT: usize = 5;

/// Donor home: giving totals and the latest donations.
#[component]
pub fn DonorDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();

    let mut donations = use_resource(move || {
        let api = api.clone();
        async move { api.my_donations().await }
    });

    let name = auth.current_user().map(|u| u.name).unwrap_or_default();
    let loaded = donations.read().clone();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Welcome back, {name}!" }
                PageSubtitle { "Here's your giving impact summary" }
            }
        }

        match loaded {
            None => rsx! { SkeletonList { lines: 4 } },
            Some(Err(e)) => rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Error" }
                        CardDescription { "Failed to load your donations." }
                    }
                    CardContent {
                        p { class: "error-text", "{e.friendly_message()}" }
                        Button {
                            onclick: move |_| donations.restart(),
                            "Retry"
                        }
                    }
                }
            },
            Some(Ok(list)) => {
                let summary = DonorSummary::from_donations(&list);
                rsx! {
                    div { class: "stat-grid",
                        StatCard { title: "Total Donated", value: format_inr(summary.total_donated) }
                        StatCard { title: "Donations Made", value: "{summary.donation_count}" }
                        StatCard { title: "Orphanages Supported", value: "{summary.orphanages_supported}" }
                    }
                    RecentDonations { donations: list.into_iter().take(RECENT_COUNT).collect::<Vec<_>>() }
                }
            }
        }
    }
}

#[component]
fn RecentDonations(donations: Vec<Donation>) -> Element {
    rsx! {
        Card {
            CardHeader {
                div { class: "card-header-row",
                    CardTitle { "Recent Donations" }
                    Link { to: Route::DonorHistory {},
                        Button { variant: ButtonVariant::Outline, "View All" }
                    }
                }
            }
            CardContent {
                if donations.is_empty() {
                    div { class: "empty-state",
                        Icon { icon: LdHeart, width: 48, height: 48 }
                        h3 { "No donations yet" }
                        p { "Start making a difference today!" }
                        Link { to: Route::Directory {},
                            Button { "Browse Orphanages" }
                        }
                    }
                } else {
                    ul { class: "donation-list",
                        for donation in donations {
                            li { key: "{donation.id}", class: "donation-row",
                                div {
                                    div { class: "donation-orphanage",
                                        {donation.orphanage_name.clone().unwrap_or_else(|| "Orphanage".to_string())}
                                    }
                                    div { class: "donation-date", "{format_date(&donation.created_at)}" }
                                }
                                div { class: "donation-amount-cell",
                                    span { class: "donation-amount", "{format_inr(donation.amount)}" }
                                    PaymentBadge { status: donation.payment_status }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
