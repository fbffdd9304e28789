//! Shared wire types for the ResQ-X admin API.
//!
//! This crate provides:
//! - The standard response envelope (`ApiResponse`) and its tagged unwrapping
//! - Subscription and plan types returned by the billing endpoints
//! - Currency formatting used when rendering prices
//! - Error codes shared by the admin server's error bodies

mod envelope;
mod errors;
mod money;
mod subscription;

pub use envelope::{ApiResponse, EnvelopeError};
pub use errors::ErrorCode;
pub use money::{Currency, format_currency};
pub use subscription::{BillingInterval, Plan, Subscription, SubscriptionStatus};
