//! Collaborator ports the conversion engine depends on. Implementations own
//! their own timeouts and auth; the engine wraps their failures into
//! `UserLookupFailure`/`VerificationFailure` without inspecting them.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Maps an opaque purchase/transaction token to an internal user id.
#[async_trait]
pub trait UserIdResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<String>;
}

/// Authoritative subscription purchase details from the store backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionPurchase {
    pub payment_state: i64,
    pub price_amount_micros: i64,
    pub price_currency_code: String,
    pub cancel_reason: i64,
}

/// Returns purchase details for a package/product/token triple from the
/// store's backend.
#[async_trait]
pub trait PurchaseVerifier: Send + Sync {
    async fn verify(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<SubscriptionPurchase>;
}
