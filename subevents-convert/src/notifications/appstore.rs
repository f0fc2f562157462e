use serde::Deserialize;

/// App-store server notification for a subscription, snake_case on the wire.
///
/// Which fields are meaningful depends on `notification_type`; the mapper
/// does a 4-way dispatch on it. Everything except the type defaults to empty
/// because the store omits fields per category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionNotification {
    pub notification_type: String,
    /// `"PROD"` for production traffic; anything else is sandbox.
    #[serde(default)]
    pub environment: String,
    /// `"true"`/`"false"` as strings, only on renewal-status changes.
    #[serde(default)]
    pub auto_renew_status: String,
    #[serde(default)]
    pub auto_renew_status_change_date_ms: String,
    #[serde(default)]
    pub auto_renew_product_id: String,
    /// Correlates a cancellation to the specific receipt entry it cancels.
    #[serde(default)]
    pub web_order_line_item_id: String,
    #[serde(default)]
    pub unified_receipt: UnifiedReceipt,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnifiedReceipt {
    #[serde(default)]
    pub environment: String,
    /// Receipt history in delivery order. The mappers rely on that order.
    #[serde(default)]
    pub latest_receipt_info: Vec<ReceiptInfo>,
}

/// One historical transaction within a subscription's receipt history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptInfo {
    #[serde(default)]
    pub original_transaction_id: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub purchase_date_ms: String,
    #[serde(default)]
    pub cancellation_date_ms: String,
    #[serde(default)]
    pub cancellation_reason: String,
    #[serde(default)]
    pub is_trial_period: String,
    #[serde(default)]
    pub web_order_line_item_id: String,
}

/// App-store notification type codes.
pub mod notification_type {
    pub const INITIAL_BUY: &str = "INITIAL_BUY";
    pub const CANCEL: &str = "CANCEL";
    pub const DID_CHANGE_RENEWAL_PREF: &str = "DID_CHANGE_RENEWAL_PREF";
    pub const DID_CHANGE_RENEWAL_STATUS: &str = "DID_CHANGE_RENEWAL_STATUS";
    pub const DID_FAIL_TO_RENEW: &str = "DID_FAIL_TO_RENEW";
    pub const DID_RECOVER: &str = "DID_RECOVER";
    pub const DID_RENEW: &str = "DID_RENEW";
    pub const INTERACTIVE_RENEWAL: &str = "INTERACTIVE_RENEWAL";
    pub const REFUND: &str = "REFUND";
}
