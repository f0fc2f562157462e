use thiserror::Error;

/// Failures surfaced by notification conversion.
///
/// A conversion either fully succeeds with a complete event or fails with one
/// of these; there is no partial or degraded event emission, and no retries.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Notification type code with no canonical mapping. Not retryable;
    /// usually signals schema/version drift on the store side.
    #[error("unsupported notification type: {0}")]
    UnsupportedNotificationType(String),

    /// Product id absent from the static price table. Requires a table
    /// update; never defaulted so analytics cannot record a bogus price.
    #[error("no price mapping for product id: {0}")]
    MissingPriceMapping(String),

    #[error("malformed epoch-millisecond timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// App-store notification whose receipt list carries no usable entry.
    #[error("receipt match not found: {0}")]
    ReceiptMatchNotFound(String),

    /// Identity-resolver failure, opaque to the engine.
    #[error("user lookup failed for token {token}: {source}")]
    UserLookupFailure {
        token: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Purchase-verifier failure, opaque to the engine.
    #[error("purchase verification failed for product {product_id}: {source}")]
    VerificationFailure {
        product_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
