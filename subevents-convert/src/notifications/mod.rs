//! serde models of the two inbound webhook payload shapes. Field names
//! follow each store's wire format; conversion-level validation lives in the
//! mappers, so optional fields default to empty here instead of failing
//! deserialization.

pub mod appstore;
pub mod playstore;
