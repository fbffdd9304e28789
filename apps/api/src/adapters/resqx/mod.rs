//! Subscription gateway backed by the ResQ-X API client.

use std::sync::Arc;

use async_trait::async_trait;
use resqx_sdk::{ApiClient, StaticSession};
use resqx_types::Subscription;

use crate::{app_error::AppResult, use_cases::subscription::SubscriptionGateway};

pub struct ResqxSubscriptionGateway {
    client: ApiClient,
}

impl ResqxSubscriptionGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubscriptionGateway for ResqxSubscriptionGateway {
    async fn current(&self, access_token: Option<String>) -> AppResult<Option<Subscription>> {
        let client = self
            .client
            .with_session(Arc::new(StaticSession::new(access_token)));
        Ok(client.subscriptions().current().await?)
    }
}
