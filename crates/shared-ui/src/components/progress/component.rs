use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Labelled progress row: caption, bar and a right-aligned figure.
///
/// `fraction` is clamped to `0.0..=1.0`.
#[component]
pub fn ProgressRow(label: String, fraction: f64, #[props(default)] caption: String) -> Element {
    let percent = clamp_percent(fraction);

    rsx! {
        div { class: "progress-row",
            div { class: "progress-row-header",
                span { class: "progress-row-label", "{label}" }
                if !caption.is_empty() {
                    span { class: "progress-row-caption", "{caption}" }
                }
            }
            Progress { value: Some(percent),
                ProgressIndicator {}
            }
        }
    }
}

fn clamp_percent(fraction: f64) -> f64 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0) * 100.0
    } else {
        0.0
    }
}
