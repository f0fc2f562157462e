use std::collections::HashMap;

use crate::common::error::{ConvertError, Result};

/// Static product-id → unit-price mapping, consulted only on the app-store
/// path (the play-store path takes its price from the verifier response).
///
/// The table is versioned out of band: a new product id ships as a table
/// update. A lookup miss is a hard failure so analytics never record a
/// defaulted price. Injected at converter construction so tests can
/// substitute alternate tables without touching shared state.
#[derive(Debug, Clone)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            prices: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn price_for(&self, product_id: &str) -> Result<f64> {
        self.prices
            .get(product_id)
            .copied()
            .ok_or_else(|| ConvertError::MissingPriceMapping(product_id.to_string()))
    }
}

impl Default for PriceTable {
    /// Current production catalog.
    fn default() -> Self {
        Self::new([
            ("droom.sleepIfUCanFree.premium.monthly.0", 4.99),
            ("droom.sleepIfUCanFree.premium.yearly.0", 54.99),
            ("droom.sleepIfUCanFree.premium.monthly.1", 4.99),
            ("droom.sleepIfUCanFree.premium.yearly.1", 54.99),
            ("droom.sleepIfUCanFree.premium.yearlyPromo.0", 46.99),
            ("droom.sleepIfUCanFree.premium.yearlyPromo.1", 46.99),
            ("com.productname.premium.monthly", 10.49),
            ("droom.sleepIfUCanFree.premium.monthly.4", 4.99),
            ("droom.sleepIfUCanFree.premium.monthlyPromo.4", 3.49),
            ("droom.sleepIfUCanFree.premium.yearly.4", 41.99),
            ("droom.sleepIfUCanFree.premium.monthlyDecoy01.4", 6.99),
            ("droom.sleepIfUCanFree.premium.monthlyDecoy02.4", 7.49),
            ("droom.sleepIfUCanFree.premium.yearly01.4", 59.99),
            ("droom.sleepIfUCanFree.premium.monthlyDecoy03.4", 9.99),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_resolves_known_products() {
        let table = PriceTable::default();
        assert_eq!(table.price_for("com.productname.premium.monthly").unwrap(), 10.49);
        assert_eq!(
            table.price_for("droom.sleepIfUCanFree.premium.yearly.4").unwrap(),
            41.99
        );
    }

    #[test]
    fn unknown_product_is_a_hard_failure() {
        let table = PriceTable::default();
        let err = table.price_for("com.example.unknown").unwrap_err();
        match err {
            ConvertError::MissingPriceMapping(id) => assert_eq!(id, "com.example.unknown"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn injected_table_overrides_catalog() {
        let table = PriceTable::new([("test.product", 1.99)]);
        assert_eq!(table.price_for("test.product").unwrap(), 1.99);
        assert!(table.price_for("com.productname.premium.monthly").is_err());
    }
}
