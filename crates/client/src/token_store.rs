use shared_types::AppConfig;
use std::sync::{Arc, Mutex};

/// Persistence for the session token issued at sign-in.
///
/// Failures to persist are logged and otherwise ignored: a lost token only
/// means the user signs in again on the next load.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);

    /// Clear the token only if it is still `expected`. A token saved by a
    /// concurrent sign-in survives.
    fn clear_if(&self, expected: &str) {
        if self.load().as_deref() == Some(expected) {
            self.clear();
        }
    }
}

/// One store shared by the API client and the session lifecycle.
pub type SharedTokenStore = Arc<dyn TokenStore>;

/// Key under which the browser build keeps the token.
pub const TOKEN_KEY: &str = "token";

/// Pick the persistent store for the current target.
pub fn default_token_store(config: &AppConfig) -> SharedTokenStore {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Arc::new(LocalStorageTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = config
            .storage
            .data_dir
            .clone()
            .unwrap_or_else(|| ".orphancare".to_string());
        Arc::new(FileTokenStore::new(dir))
    }
}

/// In-process store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot() = None;
    }

    fn clear_if(&self, expected: &str) {
        let mut slot = self.slot();
        if slot.as_deref() == Some(expected) {
            *slot = None;
        }
    }
}

/// Token kept in a file under the configured data directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_KEY),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, path = %parent.display(), "Failed to create token directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to persist session token");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to remove session token")
            }
        }
    }
}

/// Token kept in the browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        let saved = Self::storage().map(|s| s.set_item(TOKEN_KEY, token).is_ok());
        if saved != Some(true) {
            tracing::warn!("localStorage unavailable, session will not survive a reload");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
