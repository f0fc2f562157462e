use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic classification of a subscription lifecycle event, independent of
/// which store produced it. Downstream consumers branch on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Purchase,
    Renew,
    Recover,
    /// A lapsed or voluntarily stopped subscription resumed by the user.
    /// Covers app-store interactive renewals; the earlier `re_enable`
    /// spelling is retired.
    Restart,
    /// Reserved. No current mapper emits this.
    Pause,
    TurnOnAutoRenew,
    TurnOffAutoRenew,
    Cancel,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Purchase => "purchase",
            EventType::Renew => "renew",
            EventType::Recover => "recover",
            EventType::Restart => "restart",
            EventType::Pause => "pause",
            EventType::TurnOnAutoRenew => "turn_on_auto_renew",
            EventType::TurnOffAutoRenew => "turn_off_auto_renew",
            EventType::Cancel => "cancel",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing status of a subscription period, serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i64", from = "i64")]
pub enum PaymentState {
    /// Also the default when a branch carries no payment-state signal
    /// (for example a cancel event).
    #[default]
    Pending,
    Received,
    Trial,
    PendingDeferred,
}

impl From<PaymentState> for i64 {
    fn from(state: PaymentState) -> Self {
        match state {
            PaymentState::Pending => 0,
            PaymentState::Received => 1,
            PaymentState::Trial => 2,
            PaymentState::PendingDeferred => 3,
        }
    }
}

impl From<i64> for PaymentState {
    fn from(code: i64) -> Self {
        match code {
            1 => PaymentState::Received,
            2 => PaymentState::Trial,
            3 => PaymentState::PendingDeferred,
            _ => PaymentState::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Prod,
    Dev,
}

/// The unified subscription-lifecycle record handed to downstream
/// marketing/analytics pipelines. Constructed once per inbound notification
/// and never mutated; it has no identity beyond its field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEvent {
    pub event_type: EventType,
    pub user_id: String,
    pub platform: Platform,
    pub event_time_millis: i64,
    pub env: Env,
    pub properties: EventProperties,
}

/// Event payload fields. Branches that populate only some of these leave the
/// rest at their zero values, so the renewal-status-change path carries just
/// a product id. `cancellation_reason` is non-empty only for `cancel` and
/// `turn_off_auto_renew` events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventProperties {
    pub payment_state: PaymentState,
    pub app_id: String,
    pub product_id: String,
    pub currency: String,
    pub price: f64,
    pub quantity: i64,
    pub cancellation_reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(EventType::TurnOffAutoRenew).unwrap(),
            json!("turn_off_auto_renew")
        );
        assert_eq!(serde_json::to_value(EventType::Purchase).unwrap(), json!("purchase"));
        assert_eq!(serde_json::to_value(EventType::Restart).unwrap(), json!("restart"));
    }

    #[test]
    fn payment_state_serializes_as_numeric_code() {
        assert_eq!(serde_json::to_value(PaymentState::Pending).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(PaymentState::Trial).unwrap(), json!(2));
        let state: PaymentState = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(state, PaymentState::PendingDeferred);
    }

    #[test]
    fn unknown_payment_codes_fall_back_to_pending() {
        assert_eq!(PaymentState::from(99), PaymentState::Pending);
        assert_eq!(PaymentState::from(-1), PaymentState::Pending);
    }

    #[test]
    fn canonical_event_wire_shape() {
        let event = CanonicalEvent {
            event_type: EventType::Cancel,
            user_id: "user-1".to_string(),
            platform: Platform::Ios,
            event_time_millis: 1_612_000_000_000,
            env: Env::Dev,
            properties: EventProperties {
                product_id: "com.productname.premium.monthly".to_string(),
                currency: "USD".to_string(),
                price: 10.49,
                quantity: 1,
                cancellation_reason: "1".to_string(),
                ..EventProperties::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event_type": "cancel",
                "user_id": "user-1",
                "platform": "ios",
                "event_time_millis": 1_612_000_000_000i64,
                "env": "dev",
                "properties": {
                    "payment_state": 0,
                    "app_id": "",
                    "product_id": "com.productname.premium.monthly",
                    "currency": "USD",
                    "price": 10.49,
                    "quantity": 1,
                    "cancellation_reason": "1"
                }
            })
        );
    }
}
