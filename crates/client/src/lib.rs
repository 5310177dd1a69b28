//! Everything the OrphanCare front-end needs to talk to the backend:
//! the typed REST client, session token persistence and the session
//! lifecycle built on top of them.

pub mod api;
pub mod config;
pub mod session;
pub mod token_store;

pub use api::{ApiClient, AuthBackend};
pub use session::SessionStore;
pub use token_store::{default_token_store, MemoryTokenStore, SharedTokenStore, TokenStore};
