use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Overrides `[api] base_url` on native targets.
pub const API_URL_ENV: &str = "ORPHANCARE_API_URL";

/// Resolve the runtime config once and return it.
///
/// Native builds read `config.toml` and `.env`; browser builds use the copy
/// embedded at compile time. Missing or malformed files fall back to defaults.
pub fn load() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        with_env_override(config, env_api_url())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    dotenvy::dotenv().ok();
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse(&contents),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    parse(include_str!("../../../config.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
fn env_api_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_api_url() -> Option<String> {
    None
}

/// Parse config text, falling back to defaults on error.
pub fn parse(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse config: {e}, using defaults");
        AppConfig::default()
    })
}

/// Apply a backend URL override; blank values are ignored.
pub fn with_env_override(mut config: AppConfig, api_url: Option<String>) -> AppConfig {
    if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        config.api.base_url = url;
    }
    config
}
