use dioxus::prelude::*;
use shared_types::{AppError, Child, ChildCreate};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Form, FormSelect,
    Input, PageHeader, PageTitle, SkeletonList, Textarea, ToastOptions,
};
use std::collections::HashMap;

use super::{BackToDashboard, NoOrphanageYet};
use crate::auth::{use_api, use_auth};
use crate::format_helpers::opt_str;

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// Build a child record from raw form input.
pub fn child_from_form(
    name: &str,
    age: &str,
    gender: &str,
    class_grade: &str,
    bio: &str,
    special_needs: &str,
) -> Result<ChildCreate, AppError> {
    let mut errors = HashMap::new();
    let name = name.trim();
    if name.is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }
    let age = match age.trim().parse::<u32>() {
        Ok(a) if a <= 21 => Some(a),
        _ => {
            errors.insert("age".to_string(), "Enter an age between 0 and 21".to_string());
            None
        }
    };
    match age {
        Some(age) if errors.is_empty() => Ok(ChildCreate {
            name: name.to_string(),
            age,
            gender: gender.to_string(),
            class_grade: opt_str(class_grade),
            bio: opt_str(bio),
            special_needs: opt_str(special_needs),
        }),
        _ => Err(AppError::validation("Please fix the highlighted fields", errors)),
    }
}

/// Children living at the admin's orphanage.
#[component]
pub fn ChildrenManagement() -> Element {
    let auth = use_auth();
    let orphanage_id = auth
        .current_user()
        .and_then(|u| u.managed_orphanage().map(str::to_string));

    rsx! {
        BackToDashboard {}
        PageHeader {
            PageTitle { "Manage Children" }
        }
        match orphanage_id {
            Some(id) => rsx! { ChildrenPanel { orphanage_id: id } },
            None => rsx! { NoOrphanageYet {} },
        }
    }
}

#[component]
fn ChildrenPanel(orphanage_id: String) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut gender = use_signal(|| GENDERS[0].to_string());
    let mut class_grade = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut special_needs = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let list_api = api.clone();
    let list_id = orphanage_id.clone();
    let mut children = use_resource(move || {
        let api = list_api.clone();
        let id = list_id.clone();
        async move {
            match api.list_children(&id).await {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, orphanage_id = %id, "Failed to load children");
                    Vec::new()
                }
            }
        }
    });

    let add_api = api.clone();
    let add_id = orphanage_id.clone();
    let handle_add = move |_: FormEvent| {
        let child = match child_from_form(
            &name(),
            &age(),
            &gender(),
            &class_grade(),
            &bio(),
            &special_needs(),
        ) {
            Ok(child) => child,
            Err(e) => {
                field_errors.set(e.field_errors.clone());
                return;
            }
        };
        field_errors.set(HashMap::new());
        let api = add_api.clone();
        let id = add_id.clone();
        spawn(async move {
            saving.set(true);
            match api.add_child(&id, &child).await {
                Ok(added) => {
                    tracing::info!(child_id = %added.id, "Child added");
                    name.set(String::new());
                    age.set(String::new());
                    class_grade.set(String::new());
                    bio.set(String::new());
                    special_needs.set(String::new());
                    children.restart();
                    toast.success(format!("{} added", added.name), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to add child");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let remove = move |child: Child| {
        let api = api.clone();
        let id = orphanage_id.clone();
        spawn(async move {
            match api.delete_child(&id, &child.id).await {
                Ok(result) if result.success => {
                    children.restart();
                    toast.success(format!("{} removed", child.name), ToastOptions::new());
                }
                Ok(_) => {
                    toast.error("Child could not be removed".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, child_id = %child.id, "Failed to remove child");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();
    let loaded = children.read().clone();

    rsx! {
        div { class: "split-layout",
            Card {
                CardHeader { CardTitle { "Children" } }
                CardContent {
                    match loaded {
                        None => rsx! { SkeletonList { lines: 4 } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "muted", "No children recorded yet." }
                        },
                        Some(list) => rsx! {
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Age" }
                                        th { "Gender" }
                                        th { "Class" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for child in list {
                                        tr { key: "{child.id}",
                                            td { class: "cell-strong",
                                                "{child.name}"
                                                if let Some(needs) = &child.special_needs {
                                                    div { class: "muted", "Needs: {needs}" }
                                                }
                                            }
                                            td { "{child.age}" }
                                            td { "{child.gender}" }
                                            td { {child.class_grade.clone().unwrap_or_else(|| "-".to_string())} }
                                            td { class: "cell-right",
                                                Button {
                                                    variant: ButtonVariant::Destructive,
                                                    onclick: {
                                                        let mut remove = remove.clone();
                                                        let child = child.clone();
                                                        move |_| remove(child.clone())
                                                    },
                                                    "Remove"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Add a child" } }
                CardContent {
                    Form { onsubmit: handle_add,
                        Input {
                            label: "Name",
                            required: true,
                            value: name(),
                            error: error_for("name"),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Age",
                            input_type: "number",
                            required: true,
                            value: age(),
                            error: error_for("age"),
                            on_input: move |e: FormEvent| age.set(e.value()),
                        }
                        FormSelect {
                            label: "Gender",
                            value: gender(),
                            onchange: move |e: FormEvent| gender.set(e.value()),
                            for g in GENDERS {
                                option { key: "{g}", value: g, "{g}" }
                            }
                        }
                        Input {
                            label: "Class / Grade",
                            value: class_grade(),
                            on_input: move |e: FormEvent| class_grade.set(e.value()),
                        }
                        Textarea {
                            label: "Bio",
                            rows: 3,
                            value: bio(),
                            on_input: move |e: FormEvent| bio.set(e.value()),
                        }
                        Input {
                            label: "Special Needs",
                            value: special_needs(),
                            on_input: move |e: FormEvent| special_needs.set(e.value()),
                        }
                        Button { button_type: "submit", disabled: saving(),
                            if saving() { "Adding..." } else { "Add Child" }
                        }
                    }
                }
            }
        }
    }
}
