//! Serde adapter for `NUMERIC` prices.
//!
//! Prices are carried as `BigDecimal` end to end and rendered as a JSON
//! number. Input accepts either a JSON number or a numeric string.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Deserializer, Serializer, de, ser};

pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = value
        .to_f64()
        .ok_or_else(|| <S::Error as ser::Error>::custom("price out of range"))?;
    serializer.serialize_f64(number)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    // f64's Display is the shortest round-trip form, so 9.99 stays "9.99"
    let text = match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => n.to_string(),
        RawPrice::Text(s) => s,
    };
    BigDecimal::from_str(text.trim()).map_err(<D::Error as de::Error>::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "super")]
        price: BigDecimal,
    }

    #[test]
    fn test_number_input_keeps_decimal_digits() {
        let priced: Priced = serde_json::from_str(r#"{"price": 9.99}"#).unwrap();
        assert_eq!(priced.price, BigDecimal::from_str("9.99").unwrap());
    }

    #[test]
    fn test_string_input_is_accepted() {
        let priced: Priced = serde_json::from_str(r#"{"price": " 12.50 "}"#).unwrap();
        assert_eq!(priced.price, BigDecimal::from_str("12.5").unwrap());
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let result = serde_json::from_str::<Priced>(r#"{"price": "cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_is_a_json_number() {
        let priced = Priced {
            price: BigDecimal::from_str("9.99").unwrap(),
        };
        let value = serde_json::to_value(&priced).unwrap();
        assert_eq!(value["price"], serde_json::json!(9.99));
    }
}
