use dioxus::prelude::*;

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
        }
    }
}

/// A column of skeleton lines, used as the neutral loading state.
#[component]
pub fn SkeletonList(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton-list", aria_busy: "true",
            for i in 0..lines {
                Skeleton { key: "{i}", class: "skeleton-line" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_list_renders_requested_lines() {
        let html = dioxus_ssr::render_element(rsx! {
            SkeletonList { lines: 4 }
        });
        assert_eq!(html.matches("skeleton-line").count(), 4);
    }
}
