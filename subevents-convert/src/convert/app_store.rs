use subevents_core::common::error::{ConvertError, Result};
use subevents_core::domain::{
    CanonicalEvent, Env, EventProperties, EventType, PaymentState, Platform,
};
use tracing::debug;

use crate::notifications::appstore::{notification_type, SubscriptionNotification};
use crate::timestamp::parse_epoch_millis;

use super::EventConverter;

/// Maps an app-store notification to its canonical event type without
/// assembling the full event. Renewal-status changes need the auto-renew
/// flag, so this takes the whole notification rather than just the type code.
pub fn canonical_event_type(noti: &SubscriptionNotification) -> Result<EventType> {
    match noti.notification_type.as_str() {
        notification_type::CANCEL => Ok(EventType::Cancel),
        notification_type::DID_CHANGE_RENEWAL_STATUS => {
            if noti.auto_renew_status == "true" {
                Ok(EventType::TurnOnAutoRenew)
            } else {
                Ok(EventType::TurnOffAutoRenew)
            }
        }
        notification_type::INITIAL_BUY => Ok(EventType::Purchase),
        notification_type::DID_RECOVER => Ok(EventType::Recover),
        notification_type::INTERACTIVE_RENEWAL => Ok(EventType::Restart),
        notification_type::DID_RENEW => Ok(EventType::Renew),
        other => Err(ConvertError::UnsupportedNotificationType(other.to_string())),
    }
}

impl EventConverter {
    /// App-store payloads differ materially per notification category, so
    /// this path is a 4-way dispatch rather than a table mapping.
    pub(super) async fn app_store_event(
        &self,
        noti: &SubscriptionNotification,
    ) -> Result<CanonicalEvent> {
        let env = if noti.environment == "PROD" {
            Env::Prod
        } else {
            Env::Dev
        };

        debug!(
            notification_type = %noti.notification_type,
            environment = %noti.environment,
            receipts = noti.unified_receipt.latest_receipt_info.len(),
            "dispatching app-store notification"
        );

        match noti.notification_type.as_str() {
            notification_type::CANCEL => self.app_store_cancel(noti, env).await,
            notification_type::DID_CHANGE_RENEWAL_STATUS => {
                self.app_store_renewal_status_change(noti, env).await
            }
            notification_type::INITIAL_BUY
            | notification_type::DID_RENEW
            | notification_type::DID_RECOVER
            | notification_type::INTERACTIVE_RENEWAL => self.app_store_purchase(noti).await,
            other => Err(ConvertError::UnsupportedNotificationType(other.to_string())),
        }
    }

    /// Cancellations reference one specific receipt entry via the web order
    /// line item id; everything about the event (user, time, price, reason)
    /// comes from that matched entry. First match in delivery order wins.
    async fn app_store_cancel(
        &self,
        noti: &SubscriptionNotification,
        env: Env,
    ) -> Result<CanonicalEvent> {
        let line_item_id = &noti.web_order_line_item_id;
        let receipt = noti
            .unified_receipt
            .latest_receipt_info
            .iter()
            .find(|r| r.web_order_line_item_id == *line_item_id)
            .ok_or_else(|| {
                ConvertError::ReceiptMatchNotFound(format!(
                    "web order line item id {line_item_id}"
                ))
            })?;

        let user_id = self.resolve_user(&receipt.original_transaction_id).await?;
        let event_time_millis = parse_epoch_millis(&receipt.cancellation_date_ms)?;
        let price = self.prices.price_for(&receipt.product_id)?;

        Ok(CanonicalEvent {
            event_type: EventType::Cancel,
            user_id,
            platform: Platform::Ios,
            event_time_millis,
            env,
            properties: EventProperties {
                price,
                currency: "USD".to_string(),
                quantity: 1,
                product_id: receipt.product_id.clone(),
                // Verbatim store code, not remapped.
                cancellation_reason: receipt.cancellation_reason.clone(),
                ..EventProperties::default()
            },
        })
    }

    /// Auto-renew toggles carry their own change timestamp and product id on
    /// the notification itself; the first receipt entry only supplies the
    /// token for user lookup. Only `product_id` is populated in properties.
    async fn app_store_renewal_status_change(
        &self,
        noti: &SubscriptionNotification,
        env: Env,
    ) -> Result<CanonicalEvent> {
        let receipt = noti
            .unified_receipt
            .latest_receipt_info
            .first()
            .ok_or_else(|| {
                ConvertError::ReceiptMatchNotFound("latest_receipt_info is empty".to_string())
            })?;

        let user_id = self.resolve_user(&receipt.original_transaction_id).await?;
        let event_type = canonical_event_type(noti)?;
        let event_time_millis = parse_epoch_millis(&noti.auto_renew_status_change_date_ms)?;

        Ok(CanonicalEvent {
            event_type,
            user_id,
            platform: Platform::Ios,
            event_time_millis,
            env,
            properties: EventProperties {
                product_id: noti.auto_renew_product_id.clone(),
                ..EventProperties::default()
            },
        })
    }

    /// Initial purchases, renewals, recoveries and interactive renewals all
    /// read from the first receipt entry.
    async fn app_store_purchase(
        &self,
        noti: &SubscriptionNotification,
    ) -> Result<CanonicalEvent> {
        let receipt = noti
            .unified_receipt
            .latest_receipt_info
            .first()
            .ok_or_else(|| {
                ConvertError::ReceiptMatchNotFound("latest_receipt_info is empty".to_string())
            })?;

        let user_id = self.resolve_user(&receipt.original_transaction_id).await?;
        let event_type = canonical_event_type(noti)?;

        let payment_state = if receipt.is_trial_period == "true" {
            PaymentState::Trial
        } else {
            PaymentState::Received
        };

        let event_time_millis = parse_epoch_millis(&receipt.purchase_date_ms)?;
        let price = self.prices.price_for(&receipt.product_id)?;

        // The environment flag is only honored for cancel and renewal-status
        // notifications; purchase-type events are always recorded as prod.
        Ok(CanonicalEvent {
            event_type,
            user_id,
            platform: Platform::Ios,
            event_time_millis,
            env: Env::Prod,
            properties: EventProperties {
                payment_state,
                app_id: self.config.app_id.clone(),
                product_id: receipt.product_id.clone(),
                currency: "USD".to_string(),
                price,
                quantity: 1,
                ..EventProperties::default()
            },
        })
    }
}
