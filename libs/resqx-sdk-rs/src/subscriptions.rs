//! Subscription endpoints.

use resqx_types::{Plan, Subscription};
use tracing::instrument;

use crate::client::ApiClient;
use crate::error::ResqxError;

const CURRENT_PATH: &str = "subscriptions/current";
const PLANS_PATH: &str = "subscriptions/plans";

/// Typed access to the subscription resource. Every call is a fresh round
/// trip; nothing is cached.
pub struct Subscriptions<'a> {
    client: &'a ApiClient,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get the caller's current subscription.
    ///
    /// # Returns
    /// - `Ok(Some(sub))` when one is active
    /// - `Ok(None)` when the API answers successfully with no subscription
    /// - `Err` on transport failure, non-2xx, malformed envelope or `success: false`
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<Option<Subscription>, ResqxError> {
        let envelope = self.client.get::<Subscription>(CURRENT_PATH).await?;
        Ok(envelope.into_result()?)
    }

    /// List the plans available for subscription. A null payload is an empty list.
    #[instrument(skip(self))]
    pub async fn plans(&self) -> Result<Vec<Plan>, ResqxError> {
        let envelope = self.client.get::<Vec<Plan>>(PLANS_PATH).await?;
        Ok(envelope.into_result()?.unwrap_or_default())
    }
}
