pub mod analytics;
pub mod config;
pub mod donation;
pub mod error;
pub mod models;
pub mod orphanage;
pub mod role;
pub mod session;

pub use analytics::*;
pub use config::*;
pub use donation::*;
pub use error::*;
pub use models::*;
pub use orphanage::*;
pub use role::*;
pub use session::*;
