use std::sync::Arc;

use async_trait::async_trait;
use resqx_types::Subscription;
use tracing::instrument;

use crate::app_error::AppResult;

/// Source of subscription data for a given caller's access token.
#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    async fn current(&self, access_token: Option<String>) -> AppResult<Option<Subscription>>;
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct SubscriptionUseCases {
    gateway: Arc<dyn SubscriptionGateway>,
}

impl SubscriptionUseCases {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>) -> Self {
        Self { gateway }
    }

    /// `Ok(None)` means the caller has no active subscription, which is not a failure.
    #[instrument(skip_all, fields(authenticated = access_token.is_some()))]
    pub async fn current_subscription(
        &self,
        access_token: Option<String>,
    ) -> AppResult<Option<Subscription>> {
        let subscription = self.gateway.current(access_token).await?;
        tracing::debug!(found = subscription.is_some(), "Fetched current subscription");
        Ok(subscription)
    }
}
