//! State-level regulatory information

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gun-law strictness bucket derived from a Giffords grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GunLawBucket {
    Relaxed,
    #[serde(rename = "some")]
    Moderate,
    Strict,
}

impl GunLawBucket {
    /// Classify a grade by its leading letter: A/B strict, C some, D/F relaxed.
    #[must_use]
    pub fn from_grade(grade: &str) -> Option<Self> {
        match grade.trim().chars().next()?.to_ascii_uppercase() {
            'A' | 'B' => Some(GunLawBucket::Strict),
            'C' => Some(GunLawBucket::Moderate),
            'D' | 'F' => Some(GunLawBucket::Relaxed),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GunLawBucket::Relaxed => "relaxed",
            GunLawBucket::Moderate => "some",
            GunLawBucket::Strict => "strict",
        }
    }
}

impl fmt::Display for GunLawBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GunLawBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relaxed" => Ok(GunLawBucket::Relaxed),
            "some" => Ok(GunLawBucket::Moderate),
            "strict" => Ok(GunLawBucket::Strict),
            other => Err(format!("unknown gun law bucket '{other}'")),
        }
    }
}

/// Gun laws and regulations for one state, keyed by USPS code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateInfo {
    pub state: String,
    pub magazine_limit: Option<String>,
    pub gifford_score: Option<String>,
    pub ghost_gun_ban: Option<String>,
    pub assault_weapon_ban: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StateInfo {
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            state: state.into(),
            magazine_limit: None,
            gifford_score: None,
            ghost_gun_ban: None,
            assault_weapon_ban: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn with_gifford_score(mut self, score: impl Into<String>) -> Self {
        self.gifford_score = Some(score.into());
        self
    }

    /// Bucket for this state's grade, if it has a recognizable one
    #[must_use]
    pub fn gun_law_bucket(&self) -> Option<GunLawBucket> {
        self.gifford_score.as_deref().and_then(GunLawBucket::from_grade)
    }
}

impl fmt::Display for StateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Gifford Score: {}",
            self.state,
            self.gifford_score.as_deref().unwrap_or("N/A")
        )
    }
}
