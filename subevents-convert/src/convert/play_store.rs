use subevents_core::common::error::{ConvertError, Result};
use subevents_core::domain::{
    CanonicalEvent, Env, EventProperties, EventType, PaymentState, Platform,
};
use tracing::debug;

use crate::notifications::playstore::{notification_type, DeveloperNotification};
use crate::timestamp::parse_epoch_millis;

use super::EventConverter;

/// Maps a play-store notification type code to its canonical event type.
///
/// Only subscription lifecycle transitions are mapped; operational codes
/// (on-hold, grace period, pause scheduling, expiry) are unsupported.
pub fn canonical_event_type(code: i32) -> Result<EventType> {
    match code {
        notification_type::PURCHASED => Ok(EventType::Purchase),
        notification_type::RENEWED => Ok(EventType::Renew),
        notification_type::RECOVERED => Ok(EventType::Recover),
        notification_type::RESTARTED => Ok(EventType::Restart),
        notification_type::REVOKED => Ok(EventType::Cancel),
        notification_type::CANCELED => Ok(EventType::TurnOffAutoRenew),
        other => Err(ConvertError::UnsupportedNotificationType(other.to_string())),
    }
}

impl EventConverter {
    /// Play-store notifications all take the same shape, so this path is a
    /// straight table mapping plus one verifier call. Price and payment state
    /// come from the verifier's authoritative purchase record, never from the
    /// static price table.
    pub(super) async fn play_store_event(
        &self,
        noti: &DeveloperNotification,
    ) -> Result<CanonicalEvent> {
        let sub = &noti.subscription_notification;
        let token = &sub.purchase_token;

        let user_id = self.resolve_user(token).await?;
        let event_type = canonical_event_type(sub.notification_type)?;

        debug!(
            notification_type = sub.notification_type,
            subscription_id = %sub.subscription_id,
            %event_type,
            "mapped play-store notification"
        );

        let purchase = self
            .verifier
            .verify(&noti.package_name, &sub.subscription_id, token)
            .await
            .map_err(|e| ConvertError::VerificationFailure {
                product_id: sub.subscription_id.clone(),
                source: e.into(),
            })?;

        let event_time_millis = parse_epoch_millis(&noti.event_time_millis)?;

        let mut properties = EventProperties {
            payment_state: PaymentState::from(purchase.payment_state),
            app_id: self.config.app_id.clone(),
            product_id: sub.subscription_id.clone(),
            currency: purchase.price_currency_code.clone(),
            price: purchase.price_amount_micros as f64 / 1_000_000.0,
            quantity: 1,
            ..EventProperties::default()
        };

        if matches!(event_type, EventType::Cancel | EventType::TurnOffAutoRenew) {
            properties.cancellation_reason = purchase.cancel_reason.to_string();
        }

        // No sandbox distinction is surfaced for play-store traffic.
        Ok(CanonicalEvent {
            event_type,
            user_id,
            platform: Platform::Android,
            event_time_millis,
            env: Env::Prod,
            properties,
        })
    }
}
