//! Test utilities for route and use case testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - Stub gateway implementations standing in for the ResQ-X API
//! - A builder for `AppState` wired with test dependencies

mod app_state_builder;
mod factories;
mod subscription_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use subscription_mocks::*;
