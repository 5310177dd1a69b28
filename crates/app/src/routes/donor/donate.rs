use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHeart;
use dioxus_free_icons::Icon;
use shared_types::{AppErrorKind, CategorySplit, DonationCreate};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardHeader, CardTitle, Form, Input, SkeletonList,
    Textarea, ToastOptions,
};

use crate::auth::use_api;
use crate::format_helpers::{format_inr, parse_amount};
use crate::routes::Route;

/// Donation form for one orphanage. The amount is split across categories
/// with the default split before it is sent.
#[component]
pub fn DonateToOrphanage(orphanage_id: String) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut amount = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut anonymous = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let lookup_api = api.clone();
    let lookup_id = orphanage_id.clone();
    let orphanage = use_resource(move || {
        let api = lookup_api.clone();
        let id = lookup_id.clone();
        async move {
            match api.find_orphanage(&id).await {
                Ok(o) => Some(o),
                Err(e) => {
                    if e.kind != AppErrorKind::NotFound {
                        tracing::warn!(error = %e, orphanage_id = %id, "Failed to load orphanage");
                    }
                    None
                }
            }
        }
    });

    let loaded = orphanage.read().clone();

    let orphanage = match loaded {
        None => return rsx! { SkeletonList { lines: 4 } },
        Some(None) => {
            return rsx! {
                div { class: "empty-state",
                    h2 { "Orphanage Not Found" }
                    Link { to: Route::Directory {},
                        Button { "Browse Orphanages" }
                    }
                }
            }
        }
        Some(Some(o)) => o,
    };

    let parsed = parse_amount(&amount());
    let breakdown_preview: Vec<(&'static str, String, String)> = match parsed {
        Some(value) => CategorySplit::DEFAULT
            .shares
            .iter()
            .map(|(category, fraction)| {
                (
                    category.label(),
                    format!("{:.0}%", fraction * 100.0),
                    format_inr(CategorySplit::DEFAULT.share_of(*category, value)),
                )
            })
            .collect(),
        None => Vec::new(),
    };

    let orphanage_name = orphanage.name.clone();
    let handle_submit = move |_: FormEvent| {
        let Some(value) = parse_amount(&amount()) else {
            toast.error("Please enter a valid amount.".to_string(), ToastOptions::new());
            return;
        };
        let payload = DonationCreate::with_default_split(
            orphanage_id.clone(),
            value,
            Some(message()),
            anonymous(),
        );
        let api = api.clone();
        let name = orphanage_name.clone();
        spawn(async move {
            submitting.set(true);
            match api.create_donation(&payload).await {
                Ok(donation) => {
                    tracing::info!(donation_id = %donation.id, amount = value, "Donation created");
                    navigator().push(Route::DonationSuccess {
                        amount: Some(value.to_string()),
                        orphanage: Some(name),
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Donation failed");
                    toast.error("Donation failed. Please try again.".to_string(), ToastOptions::new());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "donate-page",
            div { class: "donate-heading",
                h1 { "Make a Donation" }
                p { class: "muted", "to {orphanage.name}" }
            }

            Card {
                CardContent {
                    Form { onsubmit: handle_submit,
                        Input {
                            label: "Donation Amount (₹)",
                            input_type: "number",
                            placeholder: "Enter amount",
                            required: true,
                            value: amount(),
                            on_input: move |e: FormEvent| amount.set(e.value()),
                        }

                        if !breakdown_preview.is_empty() {
                            div { class: "breakdown",
                                h3 { "Amount Breakdown" }
                                for (label, share, value) in breakdown_preview {
                                    div { key: "{label}", class: "breakdown-row",
                                        span { class: "muted", "{label} ({share})" }
                                        span { class: "breakdown-value", "{value}" }
                                    }
                                }
                            }
                        }

                        Textarea {
                            label: "Message (Optional)",
                            placeholder: "Leave a message for the orphanage...",
                            value: message(),
                            on_input: move |e: FormEvent| message.set(e.value()),
                        }

                        label { class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: anonymous(),
                                onchange: move |e: FormEvent| anonymous.set(e.checked()),
                            }
                            "Make this donation anonymous"
                        }

                        Button {
                            button_type: "submit",
                            class: "button-block",
                            disabled: submitting() || parsed.is_none(),
                            Icon { icon: LdHeart, width: 18, height: 18 }
                            if submitting() { "Processing..." } else { "Proceed to Payment" }
                        }
                    }
                }
            }

            Card { class: "donate-note",
                CardHeader { CardTitle { "Where your money goes" } }
                CardContent {
                    p { class: "muted",
                        "Every donation is split between meals, education and healthcare so the children's most basic needs are covered first."
                    }
                }
            }
        }
    }
}
