//! Rust SDK for the ResQ-X admin API.
//!
//! # Features
//!
//! - **Authenticated client** - one configured `ApiClient` with the static API key
//!   and JSON content type, attaching a bearer token read from an injected session
//! - **Request transforms** - a composable chain applied to every request before send
//! - **Domain services** - typed wrappers over REST resources (subscriptions)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use resqx_sdk::{ApiClient, ResqxConfig, SharedSession};
//!
//! let session = Arc::new(SharedSession::new());
//! let client = ApiClient::new(
//!     ResqxConfig {
//!         base_url: "https://api.resqx.net/v1/".parse()?,
//!         api_key: "rk_live_...".to_string(),
//!     },
//!     session.clone(),
//! )?;
//!
//! session.set("eyJ...");
//! match client.subscriptions().current().await? {
//!     Some(sub) => println!("{} ({})", sub.plan.name, sub.status),
//!     None => println!("no active subscription"),
//! }
//! ```

mod client;
mod error;
mod session;
mod subscriptions;
mod transform;

pub use client::{API_KEY_HEADER, ApiClient, ResqxConfig};
pub use error::ResqxError;
pub use session::{NoSession, SessionContext, SharedSession, StaticSession};
pub use subscriptions::Subscriptions;
pub use transform::{BearerAuth, RequestTransform};

// Re-export shared types for convenience
pub use resqx_types::{
    ApiResponse, BillingInterval, Currency, Plan, Subscription, SubscriptionStatus,
    format_currency,
};
