//! Retirement location record

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::decimal as decimal_str;
use super::us_states;

pub const DEFAULT_EMOJI: &str = "📍";
pub const DEFAULT_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Relative cost of living bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CostOfLiving {
    Low,
    #[default]
    Moderate,
    High,
}

impl CostOfLiving {
    /// Ordering rank used by the cost sorts
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            CostOfLiving::Low => 0,
            CostOfLiving::Moderate => 1,
            CostOfLiving::High => 2,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CostOfLiving::Low => "Low",
            CostOfLiving::Moderate => "Moderate",
            CostOfLiving::High => "High",
        }
    }
}

impl fmt::Display for CostOfLiving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostOfLiving {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(CostOfLiving::Low),
            "moderate" => Ok(CostOfLiving::Moderate),
            "high" => Ok(CostOfLiving::High),
            other => Err(format!("unknown cost of living '{other}'")),
        }
    }
}

/// Natural key of a location: city name plus state
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationKey {
    pub name: String,
    pub state: String,
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.state)
    }
}

/// A city considered as a retirement destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub state: String,
    pub county: Option<String>,

    pub match_score: i32,
    pub avg_price: String,
    pub climate: String,
    pub cost_of_living: CostOfLiving,
    pub population: String,
    pub tags: Vec<String>,
    pub va_distance: String,

    // politics
    pub state_party: Option<String>,
    pub governor: Option<String>,
    pub city_politics: Option<String>,
    pub election_2016: Option<String>,
    pub election_2016_percent: Option<i32>,
    pub election_2024: Option<String>,
    pub election_2024_percent: Option<i32>,
    pub election_change: Option<String>,

    // demographics & economics
    pub population_raw: Option<String>,
    pub density: Option<String>,
    #[serde(with = "decimal_str")]
    pub sales_tax: Option<BigDecimal>,
    #[serde(with = "decimal_str")]
    pub income_tax: Option<BigDecimal>,
    pub col_index: Option<i32>,

    // veterans affairs
    pub has_va: Option<String>,
    pub nearest_va: Option<String>,
    pub distance_to_va: Option<String>,
    pub veterans_benefits: Option<String>,

    // safety & social
    pub tci: Option<i32>,
    pub marijuana_status: Option<String>,
    pub lgbtq_rating: Option<String>,

    pub tech_hub: Option<String>,
    pub defense_hub: Option<String>,

    // weather
    pub snow_annual: Option<i32>,
    pub rain_annual: Option<i32>,
    pub sun_days: Option<i32>,
    pub avg_low_winter: Option<i32>,
    pub avg_high_summer: Option<i32>,
    pub humidity_summer: Option<i32>,
    pub climate_detailed: Option<String>,

    pub gas_price: Option<String>,
    pub description: Option<String>,

    pub emoji: String,
    pub gradient: String,
    pub featured: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Create a location with every optional field empty and display defaults set
    #[must_use]
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            state: state.into(),
            county: None,
            match_score: 0,
            avg_price: String::new(),
            climate: String::new(),
            cost_of_living: CostOfLiving::default(),
            population: String::new(),
            tags: Vec::new(),
            va_distance: "NA".to_string(),
            state_party: None,
            governor: None,
            city_politics: None,
            election_2016: None,
            election_2016_percent: None,
            election_2024: None,
            election_2024_percent: None,
            election_change: None,
            population_raw: None,
            density: None,
            sales_tax: None,
            income_tax: None,
            col_index: None,
            has_va: None,
            nearest_va: None,
            distance_to_va: None,
            veterans_benefits: None,
            tci: None,
            marijuana_status: None,
            lgbtq_rating: None,
            tech_hub: None,
            defense_hub: None,
            snow_annual: None,
            rain_annual: None,
            sun_days: None,
            avg_low_winter: None,
            avg_high_summer: None,
            humidity_summer: None,
            climate_detailed: None,
            gas_price: None,
            description: None,
            emoji: DEFAULT_EMOJI.to_string(),
            gradient: DEFAULT_GRADIENT.to_string(),
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn key(&self) -> LocationKey {
        LocationKey {
            name: self.name.clone(),
            state: self.state.clone(),
        }
    }

    /// USPS code of this location's state, whether stored as name or code
    #[must_use]
    pub fn state_code(&self) -> Option<&'static str> {
        us_states::state_code(&self.state)
    }

    /// Whether the `has_va` flag reads as an affirmative answer
    #[must_use]
    pub fn has_va_facility(&self) -> bool {
        self.has_va.as_deref().is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "yes" | "y" | "true" | "1"
            )
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} (Score: {})", self.name, self.state, self.match_score)
    }
}
