use dioxus::prelude::*;
use shared_types::PlatformAnalytics;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageActions, PageHeader,
    PageSubtitle, PageTitle, ProgressRow, SkeletonList, StatCard,
};

use crate::auth::use_api;
use crate::format_helpers::format_inr;
use crate::routes::Route;

/// Share of registered orphanages that are verified.
fn verified_fraction(stats: &PlatformAnalytics) -> f64 {
    if stats.total_orphanages == 0 {
        return 0.0;
    }
    stats.verified_orphanages as f64 / stats.total_orphanages as f64
}

/// Platform-wide figures for the super admin.
#[component]
pub fn SuperAdminDashboard() -> Element {
    let api = use_api();

    let stats = use_resource(move || {
        let api = api.clone();
        async move {
            match api.platform_analytics().await {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load platform analytics");
                    PlatformAnalytics::default()
                }
            }
        }
    });

    let loaded = stats.read().clone();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Super Admin Dashboard" }
                PageSubtitle { "Platform overview and management" }
            }
            PageActions {
                Link { to: Route::OrphanageVerification {},
                    Button { "Verify Orphanages" }
                }
                Link { to: Route::TransactionMonitoring {},
                    Button { variant: ButtonVariant::Outline, "Monitor Transactions" }
                }
            }
        }

        match loaded {
            None => rsx! { SkeletonList { lines: 4 } },
            Some(stats) => rsx! {
                div { class: "stat-grid",
                    StatCard { title: "Total Orphanages", value: "{stats.total_orphanages}" }
                    StatCard { title: "Verified", value: "{stats.verified_orphanages}" }
                    StatCard {
                        title: "Pending Verification",
                        value: "{stats.pending_orphanages}",
                        badge_label: (stats.pending_orphanages > 0).then(|| "action needed".to_string()),
                    }
                    StatCard { title: "Total Donations", value: format_inr(stats.total_donations) }
                    StatCard { title: "Active Donors", value: "{stats.total_donors}" }
                    StatCard { title: "Total Transactions", value: "{stats.total_transactions}" }
                }
                Card {
                    CardHeader { CardTitle { "Verification Progress" } }
                    CardContent {
                        ProgressRow {
                            label: "Verified orphanages",
                            fraction: verified_fraction(&stats),
                            caption: format!("{} of {}", stats.verified_orphanages, stats.total_orphanages),
                        }
                    }
                }
            },
        }
    }
}
