//! Serde adapter storing optional decimals as their canonical string form.
//!
//! Used with `#[serde(with = "decimal_str")]` so records stay encodable with
//! non-self-describing formats such as postcard.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

pub fn serialize<S>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(decimal) => serializer.serialize_some(&decimal.to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|text| BigDecimal::from_str(&text).map_err(serde::de::Error::custom))
        .transpose()
}
