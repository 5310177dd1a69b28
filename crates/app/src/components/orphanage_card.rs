use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdHeart, LdMapPin, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{estimated_progress, DonationCategory, Orphanage};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardFooter, ProgressRow};

use super::VerificationBadge;
use crate::format_helpers::format_inr;
use crate::routes::Route;

/// Directory tile for one orphanage.
#[component]
pub fn OrphanageCard(orphanage: Orphanage) -> Element {
    let meals = estimated_progress(&orphanage)
        .into_iter()
        .find(|p| p.category == DonationCategory::Meals && p.target > 0.0);
    let profile = Route::OrphanageProfile {
        slug: orphanage.slug.clone(),
    };
    let donate = Route::DonateToOrphanage {
        orphanage_id: orphanage.id.clone(),
    };

    rsx! {
        Card { class: "orphanage-card",
            div { class: "orphanage-card-cover",
                if let Some(cover) = &orphanage.cover_image {
                    img { src: "{cover}", alt: "{orphanage.name}" }
                } else {
                    Icon { icon: LdHeart, width: 48, height: 48 }
                }
                if orphanage.is_verified() {
                    div { class: "orphanage-card-badge",
                        VerificationBadge { status: orphanage.verification_status }
                    }
                }
            }
            CardContent {
                Link { to: profile.clone(), class: "orphanage-card-name", "{orphanage.name}" }
                p { class: "orphanage-card-location",
                    Icon { icon: LdMapPin, width: 14, height: 14 }
                    "{orphanage.location()}"
                }
                p { class: "orphanage-card-description", "{orphanage.headline()}" }
                div { class: "orphanage-card-stats",
                    div {
                        span { class: "stat-label",
                            Icon { icon: LdUsers, width: 12, height: 12 }
                            "Children"
                        }
                        span { class: "stat-figure", "{orphanage.total_children}" }
                    }
                    div {
                        span { class: "stat-label", "Total Raised" }
                        span { class: "stat-figure", "{format_inr(orphanage.total_donations)}" }
                    }
                }
                if let Some(meals) = meals {
                    ProgressRow {
                        label: "Estimated meals goal",
                        fraction: meals.fraction(),
                        caption: format!("{:.0}%", meals.percent()),
                    }
                }
            }
            CardFooter {
                Link { to: profile,
                    Button { variant: ButtonVariant::Outline, "View Profile" }
                }
                Link { to: donate,
                    Button { "Donate" }
                }
            }
        }
    }
}
