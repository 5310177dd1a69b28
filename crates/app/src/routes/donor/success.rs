use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCircleCheck;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::format_helpers::{format_inr, parse_amount};
use crate::routes::Route;

/// Thank-you line for the success page. Missing details degrade gracefully.
pub fn thank_you_line(amount: Option<&str>, orphanage: Option<&str>) -> String {
    let orphanage = orphanage.filter(|o| !o.trim().is_empty());
    match (amount.and_then(parse_amount), orphanage) {
        (Some(amount), Some(name)) => {
            format!("Your donation of {} to {} was successful.", format_inr(amount), name)
        }
        (Some(amount), None) => format!("Your donation of {} was successful.", format_inr(amount)),
        (None, Some(name)) => format!("Your donation to {} was successful.", name),
        (None, None) => "Your donation was successful.".to_string(),
    }
}

#[component]
pub fn DonationSuccess(amount: Option<String>, orphanage: Option<String>) -> Element {
    let line = thank_you_line(amount.as_deref(), orphanage.as_deref());

    rsx! {
        div { class: "success-page",
            div { class: "success-icon",
                Icon { icon: LdCircleCheck, width: 64, height: 64 }
            }
            h1 { "Thank You for Your Generosity!" }
            p { class: "success-line", "{line}" }
            p { class: "muted",
                "You've made a real difference today! Your contribution will help provide meals, education, and care to children in need."
            }
            div { class: "success-actions",
                Link { to: Route::DonorDashboard {},
                    Button { "View My Donations" }
                }
                Link { to: Route::Directory {},
                    Button { variant: ButtonVariant::Outline, "Donate to Another Orphanage" }
                }
            }
        }
    }
}
