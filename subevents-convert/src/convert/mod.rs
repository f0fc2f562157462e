//! The conversion engine: one entry point per platform, each assembling a
//! canonical event from the notification plus collaborator responses.

mod app_store;
mod play_store;

pub use app_store::canonical_event_type as app_store_event_type;
pub use play_store::canonical_event_type as play_store_event_type;

use std::sync::Arc;

use subevents_core::common::error::{ConvertError, Result};
use subevents_core::domain::CanonicalEvent;
use subevents_core::pricing::PriceTable;

use crate::config::ConverterConfig;
use crate::notifications::{appstore, playstore};
use crate::ports::{PurchaseVerifier, UserIdResolver};

/// Composition point for notification conversion.
///
/// Holds the collaborator ports and static configuration; no state is carried
/// between calls and nothing is cached or retried, so one converter can serve
/// many conversions concurrently as long as the collaborators are themselves
/// safe for concurrent use.
pub struct EventConverter {
    pub(crate) user_ids: Arc<dyn UserIdResolver>,
    pub(crate) verifier: Arc<dyn PurchaseVerifier>,
    pub(crate) prices: PriceTable,
    pub(crate) config: ConverterConfig,
}

impl EventConverter {
    pub fn new(
        user_ids: Arc<dyn UserIdResolver>,
        verifier: Arc<dyn PurchaseVerifier>,
        prices: PriceTable,
        config: ConverterConfig,
    ) -> Self {
        Self {
            user_ids,
            verifier,
            prices,
            config,
        }
    }

    /// Converts a play-store developer notification into a canonical event.
    pub async fn convert_play_store(
        &self,
        noti: &playstore::DeveloperNotification,
    ) -> Result<CanonicalEvent> {
        self.play_store_event(noti).await
    }

    /// Converts an app-store subscription notification into a canonical event.
    pub async fn convert_app_store(
        &self,
        noti: &appstore::SubscriptionNotification,
    ) -> Result<CanonicalEvent> {
        self.app_store_event(noti).await
    }

    pub(crate) async fn resolve_user(&self, token: &str) -> Result<String> {
        self.user_ids
            .resolve(token)
            .await
            .map_err(|e| ConvertError::UserLookupFailure {
                token: token.to_string(),
                source: e.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::playstore::{
        notification_type, DeveloperNotification, SubscriptionNotification,
    };
    use crate::ports::SubscriptionPurchase;
    use crate::testing::{FixedUserIds, FixedVerifier};

    fn converter() -> EventConverter {
        EventConverter::new(
            Arc::new(FixedUserIds),
            Arc::new(FixedVerifier {
                purchase: SubscriptionPurchase {
                    payment_state: 1,
                    price_amount_micros: 4_990_000,
                    price_currency_code: "USD".to_string(),
                    cancel_reason: 0,
                },
            }),
            PriceTable::default(),
            ConverterConfig {
                app_id: "app-1".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn conversion_is_idempotent() {
        let converter = converter();
        let noti = DeveloperNotification {
            version: "1.0".to_string(),
            package_name: "com.example.alarm".to_string(),
            event_time_millis: "1610000000000".to_string(),
            subscription_notification: SubscriptionNotification {
                version: "1.0".to_string(),
                notification_type: notification_type::RENEWED,
                purchase_token: "tok-1".to_string(),
                subscription_id: "premium.monthly".to_string(),
            },
        };

        let first = converter.convert_play_store(&noti).await.unwrap();
        let second = converter.convert_play_store(&noti).await.unwrap();
        assert_eq!(first, second);
    }
}
