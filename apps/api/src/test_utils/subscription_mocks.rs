//! Stub implementations of the subscription gateway.

use std::sync::Mutex;

use async_trait::async_trait;
use resqx_types::Subscription;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::subscription::SubscriptionGateway,
};

/// Gateway returning a canned result once and recording the tokens it saw.
#[derive(Default)]
pub struct StubSubscriptionGateway {
    result: Mutex<Option<AppResult<Option<Subscription>>>>,
    seen_tokens: Mutex<Vec<Option<String>>>,
}

impl StubSubscriptionGateway {
    pub fn returning(result: AppResult<Option<Subscription>>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            seen_tokens: Mutex::new(Vec::new()),
        }
    }

    /// Tokens passed to `current`, in call order (for test assertions).
    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.seen_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionGateway for StubSubscriptionGateway {
    async fn current(&self, access_token: Option<String>) -> AppResult<Option<Subscription>> {
        self.seen_tokens.lock().unwrap().push(access_token);
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(AppError::Internal("stub result already consumed".into())))
    }
}
