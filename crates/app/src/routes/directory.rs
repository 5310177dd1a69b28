use dioxus::prelude::*;
use shared_types::{
    DirectoryFilter, OrphanageQuery, OrphanageType, VerificationFilter, ALL_ORPHANAGE_TYPES,
};
use shared_ui::{FormSelect, Input, PageHeader, PageSubtitle, PageTitle, SkeletonList};

use crate::auth::use_api;
use crate::components::OrphanageCard;

/// Browse and filter every listed orphanage.
#[component]
pub fn Directory() -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut kind = use_signal(|| None::<OrphanageType>);
    let mut verification = use_signal(VerificationFilter::default);

    let orphanages = use_resource(move || {
        let api = api.clone();
        async move {
            match api.list_orphanages(&OrphanageQuery::default()).await {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load orphanage directory");
                    Vec::new()
                }
            }
        }
    });

    let filter = DirectoryFilter {
        search: search(),
        kind: kind(),
        verification: verification(),
    };
    let loaded = orphanages.read().clone();

    rsx! {
        PageHeader {
            PageTitle { "Find an Orphanage" }
            PageSubtitle { "Search by name or location and filter by type or verification." }
        }

        div { class: "filter-bar",
            Input {
                placeholder: "Search by name, city or state",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }
            FormSelect {
                label: "Type",
                value: kind().map(|k| k.as_str()).unwrap_or("all").to_string(),
                onchange: move |e: FormEvent| kind.set(OrphanageType::parse(&e.value())),
                option { value: "all", "All types" }
                for t in ALL_ORPHANAGE_TYPES {
                    option { key: "{t.as_str()}", value: t.as_str(), "{t.label()}" }
                }
            }
            FormSelect {
                label: "Verification",
                value: verification().as_str().to_string(),
                onchange: move |e: FormEvent| verification.set(VerificationFilter::from_key(&e.value())),
                option { value: "all", "All" }
                option { value: "verified", "Verified" }
                option { value: "pending", "Pending" }
            }
        }

        match loaded {
            None => rsx! { SkeletonList { lines: 6 } },
            Some(list) => {
                let matches = filter.apply(&list);
                rsx! {
                    h2 { class: "results-count", "{matches.len()} orphanages found" }
                    if matches.is_empty() {
                        p { class: "empty-state", "No orphanages match your filters." }
                    }
                    div { class: "card-grid",
                        for orphanage in matches {
                            OrphanageCard { key: "{orphanage.id}", orphanage: orphanage.clone() }
                        }
                    }
                }
            }
        }
    }
}
