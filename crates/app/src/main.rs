use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = client::config::load();
    if let Err(e) = dioxus::logger::init(log_level(&config.logging.level)) {
        eprintln!("[logging] Failed to initialise logger: {e}");
    }
    tracing::info!(api = %config.api.api_root(), "Starting OrphanCare");

    dioxus::launch(App);
}

/// Map a config level name to a tracing level; unknown names mean `INFO`.
fn log_level(name: &str) -> tracing::Level {
    name.trim().parse().unwrap_or(tracing::Level::INFO)
}

#[component]
fn App() -> Element {
    let config = client::config::load();
    let api = use_context_provider(|| {
        client::ApiClient::new(&config.api, client::default_token_store(config))
    });
    let sessions =
        use_context_provider(|| client::SessionStore::new(api.clone(), api.tokens().clone()));
    let mut auth = use_context_provider(AuthState::new);

    // Resolve the persisted session once; guarded pages stay pending until then.
    // A sign-in that lands first wins over the restore result.
    use_future(move || {
        let sessions = sessions.clone();
        async move {
            let restored = sessions.restore().await;
            let resolved = auth.session.peek().resolve_startup(restored);
            match resolved {
                Some(session) => auth.set_session(session),
                None => tracing::debug!("Session settled before restore finished"),
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
