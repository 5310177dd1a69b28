use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdMapPin, LdPhone};
use dioxus_free_icons::Icon;
use shared_types::{estimated_progress, AppErrorKind};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, ProgressRow, SkeletonList,
    StatCard,
};

use crate::auth::use_api;
use crate::components::VerificationBadge;
use crate::format_helpers::format_inr;
use crate::routes::Route;

/// Public profile of a single orphanage.
#[component]
pub fn OrphanageProfile(slug: String) -> Element {
    let api = use_api();

    let profile_slug = slug.clone();
    let orphanage = use_resource(move || {
        let api = api.clone();
        let slug = profile_slug.clone();
        async move {
            match api.get_orphanage(&slug).await {
                Ok(o) => Some(o),
                Err(e) => {
                    if e.kind != AppErrorKind::NotFound {
                        tracing::warn!(error = %e, slug = %slug, "Failed to load orphanage");
                    }
                    None
                }
            }
        }
    });

    let loaded = orphanage.read().clone();

    match loaded {
        None => rsx! { SkeletonList { lines: 5 } },
        Some(None) => rsx! {
            div { class: "empty-state",
                h2 { "Orphanage Not Found" }
                Link { to: Route::Directory {},
                    Button { "Browse Orphanages" }
                }
            }
        },
        Some(Some(orphanage)) => {
            let progress = estimated_progress(&orphanage);
            let has_targets = progress.iter().any(|p| p.target > 0.0);
            rsx! {
                section { class: "profile-hero",
                    if let Some(cover) = &orphanage.cover_image {
                        img { class: "profile-cover", src: "{cover}", alt: "{orphanage.name}" }
                    }
                    div { class: "profile-heading",
                        div {
                            h1 { "{orphanage.name}" }
                            p { class: "profile-location",
                                Icon { icon: LdMapPin, width: 16, height: 16 }
                                "{orphanage.location()}"
                            }
                            div { class: "profile-badges",
                                VerificationBadge { status: orphanage.verification_status }
                                span { class: "profile-type", "{orphanage.kind.label()}" }
                            }
                        }
                        Link { to: Route::DonateToOrphanage { orphanage_id: orphanage.id.clone() },
                            Button { "Donate Now" }
                        }
                    }
                }

                div { class: "profile-layout",
                    div { class: "profile-main",
                        Card {
                            CardHeader { CardTitle { "About Us" } }
                            CardContent {
                                if let Some(mission) = &orphanage.mission {
                                    p { class: "profile-mission", "{mission}" }
                                }
                                p { "{orphanage.description}" }
                            }
                        }

                        div { class: "stat-grid",
                            StatCard { title: "Children", value: "{orphanage.total_children}" }
                            StatCard { title: "Total Raised", value: format_inr(orphanage.total_donations) }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "Cost of Care" }
                                CardDescription { "What your donation provides" }
                            }
                            CardContent {
                                ul { class: "cost-list",
                                    li { "Meals per child per day: {format_inr(orphanage.per_day_meal_cost)}" }
                                    li { "Education per child per month: {format_inr(orphanage.per_month_education_cost)}" }
                                    li { "Healthcare per child per month: {format_inr(orphanage.per_month_healthcare_cost)}" }
                                }
                            }
                        }

                        if has_targets {
                            Card {
                                CardHeader {
                                    CardTitle { "Monthly Goals" }
                                    CardDescription {
                                        "Estimated from total donations using the default 50/30/20 split."
                                    }
                                }
                                CardContent {
                                    for p in progress.iter().filter(|p| p.target > 0.0) {
                                        ProgressRow {
                                            key: "{p.category.as_str()}",
                                            label: p.category.label(),
                                            fraction: p.fraction(),
                                            caption: format!("{} of {}", format_inr(p.raised), format_inr(p.target)),
                                        }
                                    }
                                }
                            }
                        }

                        if !orphanage.gallery.is_empty() {
                            div { class: "gallery",
                                for url in orphanage.gallery.iter() {
                                    img { key: "{url}", src: "{url}", alt: "Gallery photo" }
                                }
                            }
                        }
                    }

                    aside { class: "profile-aside",
                        Card {
                            CardHeader { CardTitle { "Contact" } }
                            CardContent {
                                p { "{orphanage.contact_person}" }
                                p {
                                    Icon { icon: LdPhone, width: 14, height: 14 }
                                    "{orphanage.phone}"
                                }
                                p {
                                    Icon { icon: LdMail, width: 14, height: 14 }
                                    "{orphanage.email}"
                                }
                                p { "{orphanage.address}" }
                                p { class: "muted", "Registration no. {orphanage.registration_number}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
