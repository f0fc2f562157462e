//! Conversion of store server notifications into canonical subscription
//! events for downstream marketing/analytics pipelines.

pub mod config;
pub mod convert;
pub mod notifications;
pub mod observability;
pub mod ports;
pub mod timestamp;
pub mod verifiers;

pub use convert::EventConverter;

#[cfg(test)]
pub(crate) mod testing;
