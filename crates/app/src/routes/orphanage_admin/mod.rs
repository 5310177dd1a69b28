mod children;
mod dashboard;
mod manage;
mod staff;

pub use children::ChildrenManagement;
pub use dashboard::OrphanageAdminDashboard;
pub use manage::OrphanageManagement;
pub use staff::StaffManagement;

use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;

/// Shown on admin pages until the admin has registered an orphanage.
#[component]
fn NoOrphanageYet() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "No orphanage yet" }
                CardDescription { "Register your orphanage to start receiving donations." }
            }
            CardContent {
                Link { to: Route::OrphanageManagement {},
                    Button { "Register Orphanage" }
                }
            }
        }
    }
}

#[component]
fn BackToDashboard() -> Element {
    rsx! {
        Link { to: Route::OrphanageAdminDashboard {}, class: "back-link",
            Button { variant: ButtonVariant::Ghost, "Back to Dashboard" }
        }
    }
}
