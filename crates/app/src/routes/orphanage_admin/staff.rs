use dioxus::prelude::*;
use shared_types::StaffCreate;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, Form,
    Input, PageHeader, PageTitle, SkeletonList, Textarea, ToastOptions,
};

use super::{BackToDashboard, NoOrphanageYet};
use crate::auth::{use_api, use_auth};
use crate::format_helpers::opt_str;

/// Staff members of the admin's orphanage.
#[component]
pub fn StaffManagement() -> Element {
    let auth = use_auth();
    let orphanage_id = auth
        .current_user()
        .and_then(|u| u.managed_orphanage().map(str::to_string));

    rsx! {
        BackToDashboard {}
        PageHeader {
            PageTitle { "Manage Staff" }
        }
        match orphanage_id {
            Some(id) => rsx! { StaffPanel { orphanage_id: id } },
            None => rsx! { NoOrphanageYet {} },
        }
    }
}

#[component]
fn StaffPanel(orphanage_id: String) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut donation_contact = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let list_api = api.clone();
    let list_id = orphanage_id.clone();
    let mut staff = use_resource(move || {
        let api = list_api.clone();
        let id = list_id.clone();
        async move {
            match api.list_staff(&id).await {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, orphanage_id = %id, "Failed to load staff");
                    Vec::new()
                }
            }
        }
    });

    let handle_add = move |_: FormEvent| {
        let member = StaffCreate {
            name: name().trim().to_string(),
            role: role().trim().to_string(),
            contact: contact().trim().to_string(),
            bio: opt_str(&bio()),
            is_donation_contact: donation_contact(),
        };
        if member.name.is_empty() || member.role.is_empty() || member.contact.is_empty() {
            toast.error("Name, role and contact are required".to_string(), ToastOptions::new());
            return;
        }
        let api = api.clone();
        let id = orphanage_id.clone();
        spawn(async move {
            saving.set(true);
            match api.add_staff(&id, &member).await {
                Ok(added) => {
                    tracing::info!(staff_id = %added.id, "Staff member added");
                    name.set(String::new());
                    role.set(String::new());
                    contact.set(String::new());
                    bio.set(String::new());
                    donation_contact.set(false);
                    staff.restart();
                    toast.success(format!("{} added", added.name), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to add staff member");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let loaded = staff.read().clone();

    rsx! {
        div { class: "split-layout",
            Card {
                CardHeader { CardTitle { "Team" } }
                CardContent {
                    match loaded {
                        None => rsx! { SkeletonList { lines: 3 } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "muted", "No staff members yet." }
                        },
                        Some(list) => rsx! {
                            ul { class: "staff-list",
                                for member in list {
                                    li { key: "{member.id}", class: "staff-row",
                                        div {
                                            div { class: "cell-strong", "{member.name}" }
                                            div { class: "muted", "{member.role} · {member.contact}" }
                                            if let Some(bio) = &member.bio {
                                                p { class: "staff-bio", "{bio}" }
                                            }
                                        }
                                        if member.is_donation_contact {
                                            Badge { variant: BadgeVariant::Secondary, "Donation contact" }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Add a staff member" } }
                CardContent {
                    Form { onsubmit: handle_add,
                        Input {
                            label: "Name",
                            required: true,
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Role",
                            placeholder: "Caretaker, Teacher, Warden...",
                            required: true,
                            value: role(),
                            on_input: move |e: FormEvent| role.set(e.value()),
                        }
                        Input {
                            label: "Contact",
                            placeholder: "Phone or email",
                            required: true,
                            value: contact(),
                            on_input: move |e: FormEvent| contact.set(e.value()),
                        }
                        Textarea {
                            label: "Bio",
                            rows: 3,
                            value: bio(),
                            on_input: move |e: FormEvent| bio.set(e.value()),
                        }
                        label { class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: donation_contact(),
                                onchange: move |e: FormEvent| donation_contact.set(e.checked()),
                            }
                            "Point of contact for donors"
                        }
                        Button { button_type: "submit", disabled: saving(),
                            if saving() { "Adding..." } else { "Add Staff Member" }
                        }
                    }
                }
            }
        }
    }
}
