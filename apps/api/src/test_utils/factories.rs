//! Test data factories.

use chrono::{TimeZone, Utc};
use resqx_types::{BillingInterval, Currency, Plan, Subscription, SubscriptionStatus};

/// Create a test plan with sensible defaults.
pub fn create_test_plan(customize: impl FnOnce(&mut Plan)) -> Plan {
    let mut plan = Plan {
        id: "fleet-standard".to_string(),
        name: "Fleet Standard".to_string(),
        price: 45_000.0,
        currency: Currency::Ngn,
        interval: BillingInterval::Monthly,
        features: vec!["fuel-delivery".to_string(), "roadside-rescue".to_string()],
    };
    customize(&mut plan);
    plan
}

/// Create an active test subscription on the standard plan.
pub fn create_test_subscription(customize: impl FnOnce(&mut Subscription)) -> Subscription {
    let mut subscription = Subscription {
        id: "sub_test".to_string(),
        status: SubscriptionStatus::Active,
        plan: create_test_plan(|_| {}),
        started_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single(),
        expires_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single(),
        auto_renew: true,
    };
    customize(&mut subscription);
    subscription
}
