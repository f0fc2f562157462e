use subevents_core::common::error::{ConvertError, Result};

/// Parses a store-supplied epoch-millisecond decimal string.
///
/// No range or timezone validation: negative or implausible values pass
/// through unchanged. The stores own the clock; the engine only normalizes
/// the encoding.
pub fn parse_epoch_millis(value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| ConvertError::MalformedTimestamp(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!(parse_epoch_millis("1610000000000").unwrap(), 1_610_000_000_000);
        assert_eq!(parse_epoch_millis("0").unwrap(), 0);
    }

    #[test]
    fn negative_values_pass_through() {
        assert_eq!(parse_epoch_millis("-42").unwrap(), -42);
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["", "not-a-number", "16.1e3", "1610000000000 "] {
            match parse_epoch_millis(input) {
                Err(ConvertError::MalformedTimestamp(s)) => assert_eq!(s, input),
                other => panic!("expected MalformedTimestamp for {input:?}, got {other:?}"),
            }
        }
    }
}
