//! Deserializers tolerant of how the recommendation service serializes its dataframes:
//! numbers that arrive as floats, nulls in optional columns, prices as `"10 RON"`.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

use crate::domain::common::catalog_item::{DEFAULT_CURRENCY, UNKNOWN_INDEX};

/// `null` becomes `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` becomes [`UNKNOWN_INDEX`]
pub fn index_or_unknown<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(UNKNOWN_INDEX))
}

/// Accepts `12.5`, `"12.5"`, `"12,5"` and `"12.5 RON"`
pub fn price_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(t) => {
            parse_price_text(&t).ok_or_else(|| D::Error::custom(format!("invalid price `{t}`")))
        }
    }
}

pub fn parse_price_text(text: &str) -> Option<f64> {
    text.trim()
        .trim_end_matches(DEFAULT_CURRENCY)
        .trim()
        .replace(',', ".")
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "price_amount")]
        price: f64,
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
        #[serde(default = "unknown", deserialize_with = "index_or_unknown")]
        index: f64,
    }

    fn unknown() -> f64 {
        UNKNOWN_INDEX
    }

    #[test]
    fn test_price_variants() {
        for raw in [r#"{"price": 12.5}"#, r#"{"price": "12.5"}"#, r#"{"price": "12,5 RON"}"#] {
            let p: Probe = serde_json::from_str(raw).unwrap();
            assert_eq!(p.price, 12.5, "input {raw}");
        }
        assert!(serde_json::from_str::<Probe>(r#"{"price": "cheap"}"#).is_err());
    }

    #[test]
    fn test_nulls_and_missing() {
        let p: Probe = serde_json::from_str(r#"{"price": 1, "label": null, "index": null}"#).unwrap();
        assert_eq!(p.label, "");
        assert_eq!(p.index, UNKNOWN_INDEX);

        let p: Probe = serde_json::from_str(r#"{"price": 1}"#).unwrap();
        assert_eq!(p.index, UNKNOWN_INDEX);
    }
}
