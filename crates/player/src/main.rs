//! Dunder fan site - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dunder_player::application::ApiConfig;
use dunder_player::infrastructure::http_client::ApiAdapter;
use dunder_player::ports::outbound::{CharacterApiPort, PlatformPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dunder_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    // Platform
    let platform = dunder_player::infrastructure::platform::create_platform();
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP
    let config = ApiConfig::from_env();
    tracing::info!(api = config.base_url(), "Starting Dunder fan site");
    let api: Arc<dyn CharacterApiPort> = Arc::new(ApiAdapter::new(config.clone()));

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("The Office");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(dunder_player::ui::presentation::Services::new(api, config))
        .launch(dunder_player::ui::app);
}
