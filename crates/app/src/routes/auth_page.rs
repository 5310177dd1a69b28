use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest, Role, Session};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form,
    FormSelect, Input, ToastOptions, Toasts,
};
use std::collections::HashMap;

use crate::auth::{use_auth, use_sessions, AuthState};
use crate::format_helpers::opt_str;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
enum AuthTab {
    SignIn,
    SignUp,
}

/// Where to go after signing in: the `from` target when it is a real page
/// other than the sign-in page itself, otherwise the role's dashboard.
pub fn post_sign_in_target(from: Option<&str>, role: Role) -> Route {
    from.and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Auth { .. } | Route::NotFound { .. }))
        .unwrap_or_else(|| Route::landing(Some(role)))
}

/// Publish a fresh session and move on, or surface the failure.
fn complete(
    result: Result<Session, AppError>,
    welcome: &str,
    from: Option<String>,
    mut auth: AuthState,
    mut field_errors: Signal<HashMap<String, String>>,
    toast: Toasts,
) {
    match result {
        Ok(session) => {
            let target = session
                .role()
                .map(|role| post_sign_in_target(from.as_deref(), role));
            auth.set_session(session);
            toast.success(welcome.to_string(), ToastOptions::new());
            if let Some(target) = target {
                navigator().push(target);
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Authentication rejected");
            field_errors.set(e.field_errors.clone());
            toast.error(e.friendly_message(), ToastOptions::new());
        }
    }
}

/// Sign-in and sign-up page.
#[component]
pub fn Auth(from: Option<String>) -> Element {
    let auth = use_auth();
    let sessions = use_sessions();
    let toast = use_toast();

    let mut tab = use_signal(|| AuthTab::SignIn);
    let mut submitting = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let mut login_email = use_signal(String::new);
    let mut login_password = use_signal(String::new);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Donor);

    let from_target = use_signal(move || from);

    // Already signed in: nothing to do here.
    if let Some(current) = auth.role() {
        navigator().replace(post_sign_in_target(from_target.read().as_deref(), current));
    }

    let login_sessions = sessions.clone();
    let handle_login = move |_: FormEvent| {
        let sessions = login_sessions.clone();
        spawn(async move {
            submitting.set(true);
            field_errors.set(HashMap::new());
            let result = sessions.login(&login_email(), &login_password()).await;
            let from = from_target.read().clone();
            complete(result, "Welcome back!", from, auth, field_errors, toast);
            submitting.set(false);
        });
    };

    let handle_register = move |_: FormEvent| {
        let sessions = sessions.clone();
        let request = RegisterRequest {
            city: opt_str(&city()),
            role: role(),
            ..RegisterRequest::donor(name().trim(), email().trim(), password(), phone().trim())
        };
        spawn(async move {
            submitting.set(true);
            field_errors.set(HashMap::new());
            let result = sessions.register(request).await;
            let from = from_target.read().clone();
            complete(result, "Account created successfully!", from, auth, field_errors, toast);
            submitting.set(false);
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Welcome to OrphanCare" }
                    CardDescription { "Sign in or create an account to start giving" }
                }
                CardContent {
                    div { class: "tabs",
                        button {
                            class: "tab",
                            "data-active": tab() == AuthTab::SignIn,
                            onclick: move |_| tab.set(AuthTab::SignIn),
                            "Sign In"
                        }
                        button {
                            class: "tab",
                            "data-active": tab() == AuthTab::SignUp,
                            onclick: move |_| tab.set(AuthTab::SignUp),
                            "Sign Up"
                        }
                    }

                    if tab() == AuthTab::SignIn {
                        Form { onsubmit: handle_login,
                            Input {
                                label: "Email",
                                input_type: "email",
                                required: true,
                                value: login_email(),
                                on_input: move |e: FormEvent| login_email.set(e.value()),
                            }
                            Input {
                                label: "Password",
                                input_type: "password",
                                required: true,
                                value: login_password(),
                                on_input: move |e: FormEvent| login_password.set(e.value()),
                            }
                            Button { button_type: "submit", disabled: submitting(),
                                if submitting() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    } else {
                        Form { onsubmit: handle_register,
                            Input {
                                label: "Full Name",
                                required: true,
                                value: name(),
                                error: error_for("name"),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                required: true,
                                value: email(),
                                error: error_for("email"),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            Input {
                                label: "Phone",
                                input_type: "tel",
                                required: true,
                                value: phone(),
                                error: error_for("phone"),
                                on_input: move |e: FormEvent| phone.set(e.value()),
                            }
                            Input {
                                label: "City",
                                value: city(),
                                on_input: move |e: FormEvent| city.set(e.value()),
                            }
                            Input {
                                label: "Password",
                                input_type: "password",
                                required: true,
                                value: password(),
                                error: error_for("password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            FormSelect {
                                label: "I want to",
                                value: role().as_str().to_string(),
                                onchange: move |e: FormEvent| {
                                    role.set(Role::parse(&e.value()).unwrap_or(Role::Donor));
                                },
                                option { value: Role::Donor.as_str(), "Donate to orphanages" }
                                option { value: Role::OrphanageAdmin.as_str(), "Register my orphanage" }
                            }
                            Button { button_type: "submit", disabled: submitting(),
                                if submitting() { "Creating account..." } else { "Create Account" }
                            }
                        }
                    }
                }
            }
        }
    }
}
