//! Deserializers for numeric fields the exchange sends either as JSON
//! numbers or as numeric strings (`"9.197"`)

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Deserialize a [`Decimal`] without a lossy trip through `f64`
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use rust_decimal::prelude::FromPrimitive;
    use serde::de::Error;
    use std::str::FromStr;

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => {
            Decimal::from_str(&s)
                .or_else(|_| Decimal::from_scientific(&s))
                .map_err(D::Error::custom)
        }
        StringOrNumber::Number(n) => {
            let s = n.to_string();
            if s.contains('e') || s.contains('E') {
                let f = n.as_f64().ok_or_else(|| D::Error::custom("invalid number"))?;
                Decimal::from_f64(f).ok_or_else(|| D::Error::custom("cannot convert to decimal"))
            } else {
                Decimal::from_str(&s).map_err(D::Error::custom)
            }
        }
    }
}

/// Deserialize an optional [`Decimal`]; `null` and a missing field both map to `None`
pub fn decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "decimal")] Decimal);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(d)| d))
}

/// Deserialize an `f64` from a number or numeric string
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
        StringOrNumber::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom("invalid number")),
    }
}

/// Deserialize an `i64` from a number or numeric string
///
/// Nanosecond timestamps arrive as strings, and occasionally as floats.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse::<i64>().map_err(D::Error::custom),
        StringOrNumber::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| D::Error::custom("invalid integer")),
    }
}

/// Deserialize an optional `i64` from a number or numeric string
pub fn int_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "int")] i64);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(v)| v))
}

/// Deserialize an identifier the exchange may send as a string or a number
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
