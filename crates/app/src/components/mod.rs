pub mod orphanage_card;
pub mod status;

pub use orphanage_card::OrphanageCard;
pub use status::{PaymentBadge, VerificationBadge};
