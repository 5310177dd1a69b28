use dioxus::prelude::*;
use shared_types::{Orphanage, OrphanageQuery};
use shared_ui::{Button, ButtonVariant, SkeletonList, StatCard};

use crate::auth::{use_api, use_auth};
use crate::components::OrphanageCard;
use crate::format_helpers::format_inr;
use crate::routes::Route;

/// Number of verified orphanages featured on the landing page.
const FEATURED_COUNT: usize = 3;

/// Headline numbers across the verified orphanages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reach {
    pub orphanages: usize,
    pub total_donations: f64,
    pub lives_touched: i64,
}

impl Reach {
    pub fn from_orphanages(orphanages: &[Orphanage]) -> Self {
        Self {
            orphanages: orphanages.len(),
            total_donations: orphanages.iter().map(|o| o.total_donations).sum(),
            lives_touched: orphanages.iter().map(|o| o.total_children).sum(),
        }
    }
}

#[component]
pub fn Landing() -> Element {
    let api = use_api();
    let auth = use_auth();

    let verified = use_resource(move || {
        let api = api.clone();
        async move {
            let query = OrphanageQuery {
                verified: Some(true),
                ..Default::default()
            };
            match api.list_orphanages(&query).await {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load verified orphanages");
                    Vec::new()
                }
            }
        }
    });

    let verified = verified.read().clone();

    let cta = if auth.is_authenticated() {
        Route::landing(auth.role())
    } else {
        Route::Auth { from: None }
    };

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Every child deserves a home full of hope" }
            p { class: "hero-subtitle",
                "Support verified orphanages across India with transparent donations for meals, education and healthcare."
            }
            div { class: "hero-actions",
                Link { to: Route::Directory {},
                    Button { "Find Orphanages" }
                }
                Link { to: cta,
                    Button { variant: ButtonVariant::Outline, "Start Giving" }
                }
            }
        }

        match verified {
            None => rsx! { SkeletonList { lines: 4 } },
            Some(list) => {
                let reach = Reach::from_orphanages(&list);
                rsx! {
                    section { class: "stat-grid",
                        StatCard { title: "Verified Orphanages", value: "{reach.orphanages}" }
                        StatCard { title: "Donations Raised", value: format_inr(reach.total_donations) }
                        StatCard { title: "Lives Touched", value: "{reach.lives_touched}" }
                    }
                    section { class: "featured",
                        div { class: "section-header",
                            h2 { "Featured Orphanages" }
                            Link { to: Route::Directory {}, "View all" }
                        }
                        if list.is_empty() {
                            p { class: "empty-state", "No verified orphanages yet." }
                        }
                        div { class: "card-grid",
                            for orphanage in list.iter().take(FEATURED_COUNT) {
                                OrphanageCard { key: "{orphanage.id}", orphanage: orphanage.clone() }
                            }
                        }
                    }
                }
            }
        }

        section { class: "why",
            h2 { "Why Choose OrphanCare?" }
            div { class: "why-grid",
                div { class: "why-item",
                    h3 { "Verified homes" }
                    p { "Every orphanage is reviewed by our team before it is marked verified." }
                }
                div { class: "why-item",
                    h3 { "Transparent giving" }
                    p { "See how each donation is split between meals, education and healthcare." }
                }
                div { class: "why-item",
                    h3 { "Track your impact" }
                    p { "Your dashboard keeps a full history of every contribution." }
                }
            }
        }
    }
}
