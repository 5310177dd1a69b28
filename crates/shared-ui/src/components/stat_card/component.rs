use dioxus::prelude::*;

use crate::components::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle};

/// Dashboard headline figure.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] badge_label: Option<String>,
) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardHeader {
                div { class: "stat-header-row",
                    CardTitle { "{title}" }
                    if let Some(label) = &badge_label {
                        Badge { variant: BadgeVariant::Secondary, "{label}" }
                    }
                }
            }
            CardContent {
                span { class: "stat-value", "{value}" }
                if let Some(hint) = &hint {
                    p { class: "stat-hint", "{hint}" }
                }
            }
        }
    }
}
