use dioxus::prelude::*;
use shared_types::OrphanageAnalytics;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageActions, PageHeader,
    PageSubtitle, PageTitle, ProgressRow, SkeletonList, StatCard,
};

use super::NoOrphanageYet;
use crate::auth::{use_api, use_auth};
use crate::components::PaymentBadge;
use crate::format_helpers::{format_date, format_inr};
use crate::routes::Route;

/// Donation analytics for the admin's own orphanage.
#[component]
pub fn OrphanageAdminDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();

    let orphanage_id = auth
        .current_user()
        .and_then(|u| u.managed_orphanage().map(str::to_string));

    let resource_id = orphanage_id.clone();
    let analytics = use_resource(move || {
        let api = api.clone();
        let id = resource_id.clone();
        async move {
            let id = id?;
            match api.orphanage_analytics(&id).await {
                Ok(a) => Some(a),
                Err(e) => {
                    tracing::warn!(error = %e, orphanage_id = %id, "Failed to load orphanage analytics");
                    Some(OrphanageAnalytics::default())
                }
            }
        }
    });

    let loaded = analytics.read().clone();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Orphanage Dashboard" }
                PageSubtitle { "Monitor your donations and impact" }
            }
            PageActions {
                Link { to: Route::OrphanageManagement {},
                    Button { "Manage Profile" }
                }
                Link { to: Route::ChildrenManagement {},
                    Button { variant: ButtonVariant::Outline, "Manage Children" }
                }
                Link { to: Route::StaffManagement {},
                    Button { variant: ButtonVariant::Outline, "Manage Staff" }
                }
            }
        }

        if orphanage_id.is_none() {
            NoOrphanageYet {}
        } else {
            match loaded {
                None | Some(None) => rsx! { SkeletonList { lines: 4 } },
                Some(Some(analytics)) => rsx! { AnalyticsView { analytics } },
            }
        }
    }
}

#[component]
fn AnalyticsView(analytics: OrphanageAnalytics) -> Element {
    let bars = analytics.category_bars();

    rsx! {
        div { class: "stat-grid stat-grid-4",
            StatCard { title: "Total Donations", value: format_inr(analytics.total_donations) }
            StatCard { title: "This Month", value: format_inr(analytics.this_month) }
            StatCard { title: "Total Donors", value: "{analytics.total_donors}" }
            StatCard { title: "This Year", value: format_inr(analytics.this_year) }
        }

        if !bars.is_empty() {
            Card {
                CardHeader { CardTitle { "Donations by Category" } }
                CardContent {
                    for bar in bars {
                        ProgressRow {
                            key: "{bar.label}",
                            label: bar.label.clone(),
                            fraction: bar.percent / 100.0,
                            caption: format_inr(bar.value),
                        }
                    }
                }
            }
        }

        Card {
            CardHeader { CardTitle { "Recent Donations" } }
            CardContent {
                if analytics.recent_donations.is_empty() {
                    p { class: "muted", "No donations yet." }
                } else {
                    ul { class: "donation-list",
                        for donation in analytics.recent_donations.iter() {
                            li { key: "{donation.id}", class: "donation-row",
                                div {
                                    div { class: "donation-orphanage",
                                        if donation.is_anonymous {
                                            "Anonymous"
                                        } else {
                                            {donation.donor_name.clone().unwrap_or_else(|| "Donor".to_string())}
                                        }
                                    }
                                    div { class: "donation-date", "{format_date(&donation.created_at)}" }
                                    if let Some(message) = &donation.message {
                                        p { class: "donation-message", "\u{201c}{message}\u{201d}" }
                                    }
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
