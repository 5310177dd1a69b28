use dioxus::prelude::*;
use shared_types::{
    AppError, DonationCategory, Orphanage, OrphanageCreate, OrphanageType, OrphanageUpdate,
    Session, ALL_ORPHANAGE_TYPES,
};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form,
    FormSelect, Input, PageHeader, PageTitle, SkeletonList, Textarea, ToastOptions,
};
use std::collections::{BTreeMap, HashMap};

use super::BackToDashboard;
use crate::auth::{use_api, use_auth};
use crate::format_helpers::{opt_str, parse_amount};

/// Categories whose monthly targets can be edited.
const TARGET_CATEGORIES: [DonationCategory; 3] = [
    DonationCategory::Meals,
    DonationCategory::Education,
    DonationCategory::Healthcare,
];

/// Editable text state of the profile form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub description: String,
    pub mission: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub meal_cost: String,
    pub education_cost: String,
    pub healthcare_cost: String,
    /// Category wire name → target as typed.
    pub targets: BTreeMap<String, String>,
}

fn amount_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

impl ProfileForm {
    pub fn from_orphanage(o: &Orphanage) -> Self {
        Self {
            description: o.description.clone(),
            mission: o.mission.clone().unwrap_or_default(),
            contact_person: o.contact_person.clone(),
            phone: o.phone.clone(),
            email: o.email.clone(),
            address: o.address.clone(),
            meal_cost: amount_text(o.per_day_meal_cost),
            education_cost: amount_text(o.per_month_education_cost),
            healthcare_cost: amount_text(o.per_month_healthcare_cost),
            targets: TARGET_CATEGORIES
                .iter()
                .map(|c| {
                    let target = o
                        .monthly_targets
                        .get(c.as_str())
                        .map(|t| amount_text(*t))
                        .unwrap_or_default();
                    (c.as_str().to_string(), target)
                })
                .collect(),
        }
    }

    /// Only the fields that differ from `original`. Amounts must be positive
    /// numbers; a blank target clears it.
    pub fn to_update(&self, original: &Orphanage) -> Result<OrphanageUpdate, AppError> {
        let mut errors = HashMap::new();
        let mut cost = |field: &str, input: &str, current: f64| -> Option<f64> {
            match parse_amount(input) {
                Some(v) if v != current => Some(v),
                Some(_) => None,
                None => {
                    errors.insert(field.to_string(), "Enter a positive amount".to_string());
                    None
                }
            }
        };
        let per_day_meal_cost = cost("per_day_meal_cost", &self.meal_cost, original.per_day_meal_cost);
        let per_month_education_cost = cost(
            "per_month_education_cost",
            &self.education_cost,
            original.per_month_education_cost,
        );
        let per_month_healthcare_cost = cost(
            "per_month_healthcare_cost",
            &self.healthcare_cost,
            original.per_month_healthcare_cost,
        );

        let mut targets = original.monthly_targets.clone();
        for (key, input) in &self.targets {
            if input.trim().is_empty() {
                targets.remove(key);
                continue;
            }
            match parse_amount(input) {
                Some(v) => {
                    targets.insert(key.clone(), v);
                }
                None => {
                    errors.insert(key.clone(), "Enter a positive amount".to_string());
                }
            }
        }

        if !errors.is_empty() {
            return Err(AppError::validation("Please fix the highlighted fields", errors));
        }

        let changed = |input: &str, current: &str| {
            let input = input.trim();
            (input != current).then(|| input.to_string())
        };

        Ok(OrphanageUpdate {
            description: changed(&self.description, &original.description),
            mission: changed(&self.mission, original.mission.as_deref().unwrap_or_default()),
            contact_person: changed(&self.contact_person, &original.contact_person),
            phone: changed(&self.phone, &original.phone),
            email: changed(&self.email, &original.email),
            address: changed(&self.address, &original.address),
            per_day_meal_cost,
            per_month_education_cost,
            per_month_healthcare_cost,
            monthly_targets: (targets != original.monthly_targets).then_some(targets),
        })
    }
}

/// Edit the admin's orphanage, or register one if they have none yet.
#[component]
pub fn OrphanageManagement() -> Element {
    let api = use_api();
    let auth = use_auth();

    let orphanage_id = auth
        .current_user()
        .and_then(|u| u.managed_orphanage().map(str::to_string));

    let resource_id = orphanage_id.clone();
    let orphanage = use_resource(move || {
        let api = api.clone();
        let id = resource_id.clone();
        async move {
            let id = id?;
            match api.find_orphanage(&id).await {
                Ok(o) => Some(o),
                Err(e) => {
                    tracing::warn!(error = %e, orphanage_id = %id, "Failed to load managed orphanage");
                    None
                }
            }
        }
    });

    let loaded = orphanage.read().clone();

    rsx! {
        BackToDashboard {}
        PageHeader {
            PageTitle { "Manage Orphanage" }
        }

        if orphanage_id.is_none() {
            RegisterOrphanageForm {}
        } else {
            match loaded {
                None => rsx! { SkeletonList { lines: 6 } },
                Some(None) => rsx! {
                    p { class: "error-text", "Could not load your orphanage. Please try again later." }
                },
                Some(Some(o)) => rsx! { EditProfileForm { key: "{o.id}", orphanage: o } },
            }
        }
    }
}

#[component]
fn EditProfileForm(orphanage: Orphanage) -> Element {
    let api = use_api();
    let toast = use_toast();

    let initial = orphanage.clone();
    let mut form = use_signal(move || ProfileForm::from_orphanage(&initial));
    let mut current = use_signal(|| orphanage);
    let mut saving = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_save = move |_: FormEvent| {
        let original = current.read().clone();
        let update = match form.read().to_update(&original) {
            Ok(update) => update,
            Err(e) => {
                field_errors.set(e.field_errors.clone());
                toast.error(e.friendly_message(), ToastOptions::new());
                return;
            }
        };
        field_errors.set(HashMap::new());
        if update.is_empty() {
            toast.info("Nothing to save".to_string(), ToastOptions::new());
            return;
        }
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.update_orphanage(&original.id, &update).await {
                Ok(updated) => {
                    tracing::info!(orphanage_id = %updated.id, "Orphanage profile updated");
                    form.set(ProfileForm::from_orphanage(&updated));
                    current.set(updated);
                    toast.success("Profile updated successfully".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to update orphanage");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();
    let targets = form.read().targets.clone();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{current.read().name}" }
                CardDescription { "Update what donors see on your public profile." }
            }
            CardContent {
                Form { onsubmit: handle_save,
                    Textarea {
                        label: "Description",
                        value: form.read().description.clone(),
                        on_input: move |e: FormEvent| form.write().description = e.value(),
                    }
                    Textarea {
                        label: "Mission",
                        rows: 3,
                        value: form.read().mission.clone(),
                        on_input: move |e: FormEvent| form.write().mission = e.value(),
                    }
                    div { class: "form-grid",
                        Input {
                            label: "Contact Person",
                            value: form.read().contact_person.clone(),
                            on_input: move |e: FormEvent| form.write().contact_person = e.value(),
                        }
                        Input {
                            label: "Phone",
                            value: form.read().phone.clone(),
                            on_input: move |e: FormEvent| form.write().phone = e.value(),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: form.read().email.clone(),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                        }
                        Input {
                            label: "Address",
                            value: form.read().address.clone(),
                            on_input: move |e: FormEvent| form.write().address = e.value(),
                        }
                    }

                    h3 { class: "form-section-title", "Cost of Care" }
                    div { class: "form-grid",
                        Input {
                            label: "Meal cost per day (₹)",
                            input_type: "number",
                            value: form.read().meal_cost.clone(),
                            error: error_for("per_day_meal_cost"),
                            on_input: move |e: FormEvent| form.write().meal_cost = e.value(),
                        }
                        Input {
                            label: "Education per month (₹)",
                            input_type: "number",
                            value: form.read().education_cost.clone(),
                            error: error_for("per_month_education_cost"),
                            on_input: move |e: FormEvent| form.write().education_cost = e.value(),
                        }
                        Input {
                            label: "Healthcare per month (₹)",
                            input_type: "number",
                            value: form.read().healthcare_cost.clone(),
                            error: error_for("per_month_healthcare_cost"),
                            on_input: move |e: FormEvent| form.write().healthcare_cost = e.value(),
                        }
                    }

                    h3 { class: "form-section-title", "Monthly Targets" }
                    div { class: "form-grid",
                        for (key, value) in targets {
                            Input {
                                key: "{key}",
                                label: format!("{} (₹)", DonationCategory::label_for_key(&key)),
                                input_type: "number",
                                value: value,
                                error: error_for(&key),
                                on_input: {
                                    let key = key.clone();
                                    move |e: FormEvent| {
                                        form.write().targets.insert(key.clone(), e.value());
                                    }
                                },
                            }
                        }
                    }

                    Button { button_type: "submit", disabled: saving(),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

#[component]
fn RegisterOrphanageForm() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut registration_number = use_signal(String::new);
    let mut ngo_id = use_signal(String::new);
    let mut contact_person = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state = use_signal(String::new);
    let mut kind = use_signal(|| OrphanageType::Mixed);
    let mut mission = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let payload = OrphanageCreate {
            name: name().trim().to_string(),
            description: description().trim().to_string(),
            registration_number: registration_number().trim().to_string(),
            ngo_id: opt_str(&ngo_id()),
            contact_person: contact_person().trim().to_string(),
            email: email().trim().to_string(),
            phone: phone().trim().to_string(),
            address: address().trim().to_string(),
            city: city().trim().to_string(),
            state: state().trim().to_string(),
            kind: kind(),
            mission: opt_str(&mission()),
        };
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            match api.create_orphanage(&payload).await {
                Ok(created) => {
                    tracing::info!(orphanage_id = %created.id, slug = %created.slug, "Orphanage registered");
                    // The backend links the orphanage to the admin; pick that up.
                    match api.me().await {
                        Ok(user) => auth.set_session(Session::signed_in(user)),
                        Err(e) => tracing::warn!(error = %e, "Failed to refresh user after registration"),
                    }
                    toast.success(
                        "Orphanage registered. It will appear publicly once verified.".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to register orphanage");
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Register your orphanage" }
                CardDescription { "A super admin reviews every registration before it is listed." }
            }
            CardContent {
                Form { onsubmit: handle_submit,
                    div { class: "form-grid",
                        Input {
                            label: "Orphanage Name",
                            required: true,
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Registration Number",
                            required: true,
                            value: registration_number(),
                            on_input: move |e: FormEvent| registration_number.set(e.value()),
                        }
                        Input {
                            label: "NGO ID",
                            value: ngo_id(),
                            on_input: move |e: FormEvent| ngo_id.set(e.value()),
                        }
                        FormSelect {
                            label: "Type",
                            value: kind().as_str().to_string(),
                            onchange: move |e: FormEvent| {
                                if let Some(t) = OrphanageType::parse(&e.value()) {
                                    kind.set(t);
                                }
                            },
                            for t in ALL_ORPHANAGE_TYPES.iter() {
                                option { key: "{t.as_str()}", value: t.as_str(), "{t.label()}" }
                            }
                        }
                        Input {
                            label: "Contact Person",
                            required: true,
                            value: contact_person(),
                            on_input: move |e: FormEvent| contact_person.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Phone",
                            required: true,
                            value: phone(),
                            on_input: move |e: FormEvent| phone.set(e.value()),
                        }
                        Input {
                            label: "Address",
                            required: true,
                            value: address(),
                            on_input: move |e: FormEvent| address.set(e.value()),
                        }
                        Input {
                            label: "City",
                            required: true,
                            value: city(),
                            on_input: move |e: FormEvent| city.set(e.value()),
                        }
                        Input {
                            label: "State",
                            required: true,
                            value: state(),
                            on_input: move |e: FormEvent| state.set(e.value()),
                        }
                    }
                    Textarea {
                        label: "Description",
                        value: description(),
                        on_input: move |e: FormEvent| description.set(e.value()),
                    }
                    Textarea {
                        label: "Mission (Optional)",
                        rows: 3,
                        value: mission(),
                        on_input: move |e: FormEvent| mission.set(e.value()),
                    }
                    Button { button_type: "submit", disabled: submitting(),
                        if submitting() { "Registering..." } else { "Register Orphanage" }
                    }
                }
            }
        }
    }
}
