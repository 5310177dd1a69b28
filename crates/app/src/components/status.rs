use dioxus::prelude::*;
use shared_types::{PaymentStatus, VerificationStatus};
use shared_ui::{Badge, BadgeVariant};

pub fn verification_variant(status: VerificationStatus) -> BadgeVariant {
    match status {
        VerificationStatus::Verified => BadgeVariant::Success,
        VerificationStatus::Pending => BadgeVariant::Warning,
        VerificationStatus::Rejected => BadgeVariant::Destructive,
    }
}

pub fn payment_variant(status: PaymentStatus) -> BadgeVariant {
    match status {
        PaymentStatus::Completed => BadgeVariant::Success,
        PaymentStatus::Pending => BadgeVariant::Warning,
        PaymentStatus::Failed => BadgeVariant::Destructive,
    }
}

#[component]
pub fn VerificationBadge(status: VerificationStatus) -> Element {
    rsx! {
        Badge { variant: verification_variant(status), "{status.label()}" }
    }
}

#[component]
pub fn PaymentBadge(status: PaymentStatus) -> Element {
    rsx! {
        Badge { variant: payment_variant(status), "{status.as_str()}" }
    }
}
