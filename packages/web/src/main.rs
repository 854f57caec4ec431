use dioxus::prelude::*;

use state::ClientConfig;
use ui::{CounterPanel, Greeting, UserProfile};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../profile.toml");

/// User shown by the profile card.
const DEMO_USER_ID: u64 = 1;

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled config, falling back to defaults if it is invalid.
fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {}, using defaults", ClientConfig::filename(), e);
        ClientConfig::default()
    })
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = load_config();
        tracing::info!("Fetching users from {}", config.api.base_url);
        ui::make_source(&config)
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Greeting {}
        CounterPanel {}
        UserProfile { user_id: DEMO_USER_ID }
    }
}
