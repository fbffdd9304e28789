use std::fs::File;
use std::sync::{Arc, Mutex};

use resqx_sdk::{ApiClient, NoSession, ResqxConfig};
use secrecy::ExposeSecret;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, resqx::ResqxSubscriptionGateway},
    infra::{config::AppConfig, error::InfraError},
    use_cases::subscription::{SubscriptionGateway, SubscriptionUseCases},
};

pub fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env();

    // Inbound requests swap in their own cookie session per call.
    let api_client = ApiClient::new(
        ResqxConfig {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.expose_secret().to_string(),
        },
        Arc::new(NoSession),
    )?;

    let gateway = Arc::new(ResqxSubscriptionGateway::new(api_client)) as Arc<dyn SubscriptionGateway>;

    tracing::info!(api_base_url = %config.api_base_url, "ResQ-X API client configured");

    Ok(AppState {
        config: Arc::new(config),
        subscription_use_cases: Arc::new(SubscriptionUseCases::new(gateway)),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "resqx_admin=debug,resqx_sdk=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped when the file can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(Mutex::new(file))
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
