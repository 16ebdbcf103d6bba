mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use crate::core::models::UserSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let settings = UserSettings::load().unwrap_or_else(|e| {
        log::warn!("[MAIN] Failed to load settings: {}, using defaults", e);
        UserSettings::default()
    });

    app::GameSearchApp::build(settings)?.run().await
}
