use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle};

use crate::auth::use_auth;

/// Account details of the signed-in donor.
#[component]
pub fn DonorProfile() -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user() else {
        return rsx! {};
    };

    rsx! {
        PageHeader {
            PageTitle { "My Profile" }
        }

        Card { class: "profile-card",
            CardHeader {
                div { class: "profile-identity",
                    if let Some(picture) = &user.profile_picture {
                        img { class: "avatar avatar-lg", src: "{picture}", alt: "{user.name}" }
                    } else {
                        span { class: "avatar avatar-lg", "{user.initial()}" }
                    }
                    div {
                        CardTitle { "{user.name}" }
                        p { class: "muted", "{user.role.display_name()}" }
                    }
                }
            }
            CardContent {
                dl { class: "detail-list",
                    dt { "Email" }
                    dd { "{user.email}" }
                    dt { "Phone" }
                    dd { "{user.phone}" }
                    dt { "City" }
                    dd { {user.city.clone().unwrap_or_else(|| "Not set".to_string())} }
                    dt { "Country" }
                    dd { "{user.country}" }
                }
            }
        }
    }
}
