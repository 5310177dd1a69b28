pub mod auth_page;
pub mod directory;
pub mod donor;
pub mod landing;
pub mod not_found;
pub mod orphanage_admin;
pub mod orphanage_profile;
pub mod super_admin;

use crate::auth::{use_auth, use_sessions};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdHeart, LdLayoutDashboard, LdLogOut, LdSearch, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{authorize, landing_path, AccessDecision, Role};
use shared_ui::{use_toast, Button, ButtonVariant, ToastOptions};

use auth_page::Auth;
use directory::Directory;
use donor::{DonateToOrphanage, DonationSuccess, DonorDashboard, DonorHistory, DonorProfile};
use landing::Landing;
use not_found::NotFound;
use orphanage_admin::{ChildrenManagement, OrphanageAdminDashboard, OrphanageManagement, StaffManagement};
use orphanage_profile::OrphanageProfile;
use super_admin::{OrphanageVerification, SuperAdminDashboard, TransactionMonitoring};

const DONOR_ONLY: &[Role] = &[Role::Donor];
const ORPHANAGE_ADMIN_ONLY: &[Role] = &[Role::OrphanageAdmin];
const SUPER_ADMIN_ONLY: &[Role] = &[Role::SuperAdmin];

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Landing {},
        #[route("/orphanages")]
        Directory {},
        #[route("/orphanage/:slug")]
        OrphanageProfile { slug: String },
        #[route("/auth?:from")]
        Auth { from: Option<String> },

        #[layout(ProtectedArea)]
            // Donor
            #[route("/donor/dashboard")]
            DonorDashboard {},
            #[route("/donor/history")]
            DonorHistory {},
            #[route("/donor/profile")]
            DonorProfile {},
            #[route("/donate/:orphanage_id")]
            DonateToOrphanage { orphanage_id: String },
            #[route("/donation/success?:amount&:orphanage")]
            DonationSuccess { amount: Option<String>, orphanage: Option<String> },
            // Orphanage admin
            #[route("/orphanage-admin/dashboard")]
            OrphanageAdminDashboard {},
            #[route("/orphanage-admin/manage")]
            OrphanageManagement {},
            #[route("/orphanage-admin/children")]
            ChildrenManagement {},
            #[route("/orphanage-admin/staff")]
            StaffManagement {},
            // Super admin
            #[route("/admin/dashboard")]
            SuperAdminDashboard {},
            #[route("/admin/verification")]
            OrphanageVerification {},
            #[route("/admin/transactions")]
            TransactionMonitoring {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Roles allowed to render this route. `None` for public routes, which
    /// sit outside the guard.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Landing {}
            | Route::Directory {}
            | Route::OrphanageProfile { .. }
            | Route::Auth { .. }
            | Route::NotFound { .. } => None,
            Route::DonorDashboard {}
            | Route::DonorHistory {}
            | Route::DonorProfile {}
            | Route::DonateToOrphanage { .. }
            | Route::DonationSuccess { .. } => Some(DONOR_ONLY),
            Route::OrphanageAdminDashboard {}
            | Route::OrphanageManagement {}
            | Route::ChildrenManagement {}
            | Route::StaffManagement {} => Some(ORPHANAGE_ADMIN_ONLY),
            Route::SuperAdminDashboard {}
            | Route::OrphanageVerification {}
            | Route::TransactionMonitoring {} => Some(SUPER_ADMIN_ONLY),
        }
    }

    /// Default dashboard for a role; home when signed out.
    pub fn landing(role: Option<Role>) -> Route {
        landing_path(role).parse().unwrap_or(Route::Landing {})
    }

    /// Where a denied guard sends the user.
    pub fn redirect_for(decision: AccessDecision, current: &Route) -> Option<Route> {
        match decision {
            AccessDecision::DenyUnauthenticated => Some(Route::Auth {
                from: Some(current.to_string()),
            }),
            AccessDecision::DenyForbidden => Some(Route::Landing {}),
            AccessDecision::Pending | AccessDecision::Allow => None,
        }
    }
}

/// Guard layout: renders the page only when the session satisfies the
/// route's allowed roles.
#[component]
fn ProtectedArea() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    let decision = authorize(&auth.session.read(), route.allowed_roles());
    let redirect = Route::redirect_for(decision, &route);

    // Navigate once per distinct target, not on every re-render.
    use_effect(use_reactive((&redirect,), move |(redirect,)| {
        if let Some(target) = redirect {
            tracing::debug!(target = %target, "Guard redirect");
            navigator().replace(target);
        }
    }));

    match decision {
        AccessDecision::Allow => rsx! { Outlet::<Route> {} },
        AccessDecision::Pending => rsx! {
            div { class: "auth-guard-loading",
                div { class: "spinner" }
            }
        },
        _ => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting..." }
            }
        },
    }
}

/// Top navigation shared by every page.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();
    let toast = use_toast();
    let route: Route = use_route();

    let user = auth.current_user();
    let on_auth_page = matches!(route, Route::Auth { .. });

    let logout = move |_: MouseEvent| {
        auth.set_session(sessions.logout());
        toast.success("Logged out successfully".to_string(), ToastOptions::new());
        navigator().push(Route::Landing {});
    };

    rsx! {
        header { class: "navbar",
            Link { to: Route::Landing {}, class: "navbar-brand",
                Icon { icon: LdHeart, width: 22, height: 22 }
                span { "OrphanCare" }
            }
            nav { class: "navbar-links",
                Link { to: Route::Directory {}, class: "navbar-link",
                    Icon { icon: LdSearch, width: 16, height: 16 }
                    "Find Orphanages"
                }
                match user {
                    Some(user) => rsx! {
                        Link { to: Route::landing(Some(user.role)), class: "navbar-link",
                            Icon { icon: LdLayoutDashboard, width: 16, height: 16 }
                            "Dashboard"
                        }
                        if user.role == Role::Donor {
                            Link { to: Route::DonorProfile {}, class: "navbar-link",
                                Icon { icon: LdUser, width: 16, height: 16 }
                                "Profile"
                            }
                        }
                        span { class: "navbar-user",
                            span { class: "avatar", "{user.initial()}" }
                            span { class: "navbar-user-name", "{user.name}" }
                            span { class: "navbar-user-role", "{user.role.display_name()}" }
                        }
                        Button { variant: ButtonVariant::Ghost, onclick: logout,
                            Icon { icon: LdLogOut, width: 16, height: 16 }
                            "Logout"
                        }
                    },
                    None if !on_auth_page => rsx! {
                        Link { to: Route::Auth { from: None }, class: "navbar-link", "Sign In" }
                        Link { to: Route::Auth { from: None }, class: "button button-primary", "Get Started" }
                    },
                    None => rsx! {},
                }
            }
        }
        main { class: "page",
            Outlet::<Route> {}
        }
        footer { class: "footer",
            p { "OrphanCare connects donors with verified orphanages across India." }
        }
    }
}
