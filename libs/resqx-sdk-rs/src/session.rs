//! Session contexts the client reads the bearer token from.

use std::sync::RwLock;

/// Source of the current access token.
///
/// The client calls `access_token()` on every send; implementations must not
/// expect the value to be cached anywhere.
pub trait SessionContext: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Anonymous session: requests go out without `Authorization`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSession;

impl SessionContext for NoSession {
    fn access_token(&self) -> Option<String> {
        None
    }
}

/// Fixed token, e.g. one lifted from an inbound request's cookies.
#[derive(Debug, Default, Clone)]
pub struct StaticSession(pub Option<String>);

impl StaticSession {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }
}

impl SessionContext for StaticSession {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Mutable session for long-lived callers that log in and out.
#[derive(Debug, Default)]
pub struct SharedSession {
    token: RwLock<Option<String>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl SessionContext for SharedSession {
    fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
