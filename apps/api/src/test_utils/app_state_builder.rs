//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` with stubbed upstream
//! dependencies so routes can be exercised without a live ResQ-X API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::StubSubscriptionGateway,
    use_cases::subscription::{SubscriptionGateway, SubscriptionUseCases},
};

pub fn create_test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        api_base_url: "http://localhost:9/v1/".parse().unwrap(),
        api_key: SecretString::new("rk_test_key".into()),
        signup_email_ttl: Duration::seconds(600),
        cookie_secure: true,
    }
}

pub struct TestAppStateBuilder {
    config: AppConfig,
    subscription_gateway: Arc<dyn SubscriptionGateway>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            config: create_test_config(),
            subscription_gateway: Arc::new(StubSubscriptionGateway::returning(Ok(None))),
        }
    }

    pub fn with_config(mut self, customize: impl FnOnce(&mut AppConfig)) -> Self {
        customize(&mut self.config);
        self
    }

    pub fn with_subscription_gateway(mut self, gateway: Arc<dyn SubscriptionGateway>) -> Self {
        self.subscription_gateway = gateway;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(self.config),
            subscription_use_cases: Arc::new(SubscriptionUseCases::new(self.subscription_gateway)),
        }
    }
}
