use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::ports::{PurchaseVerifier, SubscriptionPurchase};

const DEFAULT_BASE_URL: &str = "https://androidpublisher.googleapis.com/androidpublisher/v3";

/// Verifier backed by the play-store publisher REST API
/// (`purchases.subscriptions.get`).
///
/// Constructed explicitly with its credentials and shared by reference; there
/// is no lazy process-wide singleton, so concurrent first use cannot race on
/// initialization. Token refresh is the caller's concern.
pub struct HttpPlayStoreVerifier {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpPlayStoreVerifier {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, access_token)
    }

    /// Overridable base URL for pointing tests at a local stub server.
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl PurchaseVerifier for HttpPlayStoreVerifier {
    async fn verify(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<SubscriptionPurchase> {
        let url = format!(
            "{}/applications/{}/purchases/subscriptions/{}/tokens/{}",
            self.base_url, package_name, product_id, token
        );

        debug!(%package_name, %product_id, "verifying play-store purchase");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .context("publisher API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("publisher API returned {status} for product {product_id}");
        }

        resp.json::<SubscriptionPurchase>()
            .await
            .context("failed to decode publisher API response")
    }
}
