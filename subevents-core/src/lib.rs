pub mod common;
pub mod domain;
pub mod pricing;

pub use domain::*;
