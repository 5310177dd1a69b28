mod dashboard;
mod donate;
mod history;
mod profile;
mod success;

pub use dashboard::DonorDashboard;
pub use donate::DonateToOrphanage;
pub use history::DonorHistory;
pub use profile::DonorProfile;
pub use success::DonationSuccess;
