use serde::Deserialize;

/// Real-time developer notification delivered by the play store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperNotification {
    #[serde(default)]
    pub version: String,
    pub package_name: String,
    /// Epoch milliseconds as a decimal string.
    pub event_time_millis: String,
    pub subscription_notification: SubscriptionNotification,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionNotification {
    #[serde(default)]
    pub version: String,
    pub notification_type: i32,
    pub purchase_token: String,
    pub subscription_id: String,
}

/// Play-store subscription notification type codes.
pub mod notification_type {
    pub const RECOVERED: i32 = 1;
    pub const RENEWED: i32 = 2;
    pub const CANCELED: i32 = 3;
    pub const PURCHASED: i32 = 4;
    pub const ON_HOLD: i32 = 5;
    pub const IN_GRACE_PERIOD: i32 = 6;
    pub const RESTARTED: i32 = 7;
    pub const PRICE_CHANGE_CONFIRMED: i32 = 8;
    pub const DEFERRED: i32 = 9;
    pub const PAUSED: i32 = 10;
    pub const PAUSE_SCHEDULE_CHANGED: i32 = 11;
    pub const REVOKED: i32 = 12;
    pub const EXPIRED: i32 = 13;
}
