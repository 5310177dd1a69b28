mod dashboard;
mod transactions;
mod verification;

pub use dashboard::SuperAdminDashboard;
pub use transactions::TransactionMonitoring;
pub use verification::OrphanageVerification;
