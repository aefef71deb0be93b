//! Serde helpers for decimal fields
//!
//! Bittrex sends prices and quantities as JSON numbers. Parsing them straight
//! into `f64` loses precision, so numeric fields are held as [`Decimal`],
//! read from the literal digits of the payload, and written back out as JSON
//! numbers with the same digits.
//!
//! Use with `#[serde(with = "crate::decimal")]`, or
//! `#[serde(with = "crate::decimal::option")]` for nullable fields.

use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::str::FromStr;

// serde_json is built with `arbitrary_precision`, so a `Number` keeps the
// literal digits of the payload and never passes through `f64`.
fn parse<E: Error>(value: Value) -> Result<Decimal, E> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim()).map_err(E::custom),
        Value::Number(n) => {
            let s = n.to_string();
            // Very small values come back in scientific notation (e.g. 1e-8)
            if s.contains('e') || s.contains('E') {
                Decimal::from_scientific(&s).map_err(E::custom)
            } else {
                Decimal::from_str(&s).map_err(E::custom)
            }
        }
        other => Err(E::custom(format!("expected a decimal, got {}", other))),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    parse(Value::deserialize(deserializer)?)
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let digits = value.to_string();
    match Number::from_str(&digits) {
        Ok(number) => number.serialize(serializer),
        Err(_) => serializer.serialize_str(&digits),
    }
}

/// Same as the parent module, for `Option<Decimal>` fields that may be `null`
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            value => parse(value).map(Some),
        }
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => super::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};
    use std::str::FromStr;

    #[derive(Debug, Serialize, Deserialize)]
    struct Price {
        #[serde(with = "super")]
        value: Decimal,
        #[serde(with = "super::option", default)]
        maybe: Option<Decimal>,
    }

    #[test]
    fn test_number_keeps_precision() {
        let price: Price = serde_json::from_str(r#"{"value": 0.00460208, "maybe": null}"#).unwrap();
        assert_eq!(price.value.to_string(), "0.00460208");
        assert_eq!(price.maybe, None);
    }

    #[test]
    fn test_large_value_round_trips_exactly() {
        let body = r#"{"value":1234567890.12345678,"maybe":0.1}"#;
        let price: Price = serde_json::from_str(body).unwrap();
        assert_eq!(price.value.to_string(), "1234567890.12345678");
        assert_eq!(price.maybe.unwrap().to_string(), "0.1");
        assert_eq!(serde_json::to_string(&price).unwrap(), body);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<Price>(r#"{"value": true}"#).is_err());
        assert!(serde_json::from_str::<Price>(r#"{"value": "abc"}"#).is_err());
    }

    #[test]
    fn test_scientific_notation() {
        let price: Price = serde_json::from_str(r#"{"value": 1e-8, "maybe": 2.5E-7}"#).unwrap();
        assert_eq!(price.value, Decimal::from_str("0.00000001").unwrap());
        assert_eq!(price.maybe, Some(Decimal::from_str("0.00000025").unwrap()));
    }

    #[test]
    fn test_string_accepted() {
        let price: Price = serde_json::from_str(r#"{"value": "88813.5"}"#).unwrap();
        assert_eq!(price.value.to_string(), "88813.5");
    }

    #[test]
    fn test_serializes_as_number() {
        let price = Price {
            value: Decimal::from_str("0.25").unwrap(),
            maybe: None,
        };
        let json = serde_json::to_value(&price).unwrap();
        assert!(json["value"].is_number());
        assert_eq!(json["value"].as_f64(), Some(0.25));
        assert!(json["maybe"].is_null());
    }
}
