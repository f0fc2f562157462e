//! Shared mock ports for unit tests. Real publisher-API calls are not
//! idempotent, so tests always run against fixed responses.

use anyhow::Result;
use async_trait::async_trait;

use crate::ports::{PurchaseVerifier, SubscriptionPurchase, UserIdResolver};

pub const FAKE_USER_ID: &str = "fake-user-id";

/// Resolves every token to [`FAKE_USER_ID`].
pub struct FixedUserIds;

#[async_trait]
impl UserIdResolver for FixedUserIds {
    async fn resolve(&self, _token: &str) -> Result<String> {
        Ok(FAKE_USER_ID.to_string())
    }
}

/// Fails every lookup, for exercising the error path.
pub struct FailingUserIds;

#[async_trait]
impl UserIdResolver for FailingUserIds {
    async fn resolve(&self, token: &str) -> Result<String> {
        anyhow::bail!("no user for token {token}")
    }
}

/// Returns the same purchase record for every verification.
pub struct FixedVerifier {
    pub purchase: SubscriptionPurchase,
}

#[async_trait]
impl PurchaseVerifier for FixedVerifier {
    async fn verify(
        &self,
        _package_name: &str,
        _product_id: &str,
        _token: &str,
    ) -> Result<SubscriptionPurchase> {
        Ok(self.purchase.clone())
    }
}

/// Fails every verification, for exercising the error path.
pub struct FailingVerifier;

#[async_trait]
impl PurchaseVerifier for FailingVerifier {
    async fn verify(
        &self,
        _package_name: &str,
        product_id: &str,
        _token: &str,
    ) -> Result<SubscriptionPurchase> {
        anyhow::bail!("publisher API rejected {product_id}")
    }
}
