//! Query parameters of the explore/filter views

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::GunLawBucket;

/// Annual snowfall band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnowLevel {
    /// None recorded, or exactly zero
    Zero,
    /// More than zero, at most 20 inches
    Light,
    /// More than 20 inches
    Heavy,
}

impl FromStr for SnowLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(SnowLevel::Zero),
            "some" => Ok(SnowLevel::Light),
            "lots" => Ok(SnowLevel::Heavy),
            other => Err(format!("unknown snow level '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Best,
    CostAsc,
    CostDesc,
    Climate,
    Va,
    GasAsc,
    GasDesc,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(SortKey::Best),
            "cost_asc" => Ok(SortKey::CostAsc),
            "cost_desc" => Ok(SortKey::CostDesc),
            "climate" => Ok(SortKey::Climate),
            "va" => Ok(SortKey::Va),
            "gas_asc" => Ok(SortKey::GasAsc),
            "gas_desc" => Ok(SortKey::GasDesc),
            other => Err(format!("unknown sort '{other}'")),
        }
    }
}

/// Raw query string values as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExploreParams {
    pub snow: Option<String>,
    pub gun_laws: Option<String>,
    pub lgbtq_friendly: Option<String>,
    pub sort: Option<String>,
}

impl ExploreParams {
    /// Collect raw key/value pairs; a repeated key keeps its last value and
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "snow" => &mut params.snow,
                "gun_laws" => &mut params.gun_laws,
                "lgbtq_friendly" => &mut params.lgbtq_friendly,
                "sort" => &mut params.sort,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }
}

/// Validated query; unknown values fall back to "no filter" / default sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExploreQuery {
    pub snow: Option<SnowLevel>,
    pub gun_laws: Option<GunLawBucket>,
    pub lgbtq_friendly: bool,
    pub sort: SortKey,
}

impl From<&ExploreParams> for ExploreQuery {
    fn from(params: &ExploreParams) -> Self {
        Self {
            snow: parse_lenient(params.snow.as_deref()),
            gun_laws: parse_lenient(params.gun_laws.as_deref()),
            lgbtq_friendly: params.lgbtq_friendly.as_deref() == Some("true"),
            sort: parse_lenient(params.sort.as_deref()).unwrap_or_default(),
        }
    }
}

fn parse_lenient<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}
