//! Location predicates, AND-combined in the order they are built

use std::collections::HashSet;

use super::query::{ExploreQuery, SnowLevel};
use crate::models::{GunLawBucket, Location, StateInfo, us_states};

/// Snowfall above this many inches counts as "lots"
pub const LIGHT_SNOW_MAX_INCHES: i32 = 20;

/// Ratings strictly below this are considered LGBTQ-friendly
pub const LGBTQ_FRIENDLY_BELOW: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Snow(SnowLevel),
    /// Location's state code must be one of these
    StateIn(HashSet<&'static str>),
    LgbtqFriendly,
}

impl Filter {
    #[must_use]
    pub fn matches(&self, location: &Location) -> bool {
        match self {
            Filter::Snow(level) => snow_matches(*level, location.snow_annual),
            Filter::StateIn(codes) => location
                .state_code()
                .is_some_and(|code| codes.contains(code)),
            Filter::LgbtqFriendly => location
                .lgbtq_rating
                .as_deref()
                .and_then(|rating| rating.trim().parse::<f64>().ok())
                .is_some_and(|rating| rating < LGBTQ_FRIENDLY_BELOW),
        }
    }
}

fn snow_matches(level: SnowLevel, snow: Option<i32>) -> bool {
    match level {
        SnowLevel::Zero => matches!(snow, None | Some(0)),
        SnowLevel::Light => snow.is_some_and(|inches| inches > 0 && inches <= LIGHT_SNOW_MAX_INCHES),
        SnowLevel::Heavy => snow.is_some_and(|inches| inches > LIGHT_SNOW_MAX_INCHES),
    }
}

/// Codes of the states whose Giffords grade falls in `bucket`
#[must_use]
pub fn states_in_bucket(state_infos: &[StateInfo], bucket: GunLawBucket) -> HashSet<&'static str> {
    state_infos
        .iter()
        .filter(|info| info.gun_law_bucket() == Some(bucket))
        .filter_map(|info| us_states::state_code(&info.state))
        .collect()
}

/// Predicates for `query`; empty when nothing is filtered
#[must_use]
pub fn build_filters(query: &ExploreQuery, state_infos: &[StateInfo]) -> Vec<Filter> {
    let mut filters = Vec::new();
    if let Some(level) = query.snow {
        filters.push(Filter::Snow(level));
    }
    if let Some(bucket) = query.gun_laws {
        filters.push(Filter::StateIn(states_in_bucket(state_infos, bucket)));
    }
    if query.lgbtq_friendly {
        filters.push(Filter::LgbtqFriendly);
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SnowLevel::Zero, None, true)]
    #[case(SnowLevel::Zero, Some(0), true)]
    #[case(SnowLevel::Zero, Some(1), false)]
    #[case(SnowLevel::Light, None, false)]
    #[case(SnowLevel::Light, Some(0), false)]
    #[case(SnowLevel::Light, Some(1), true)]
    #[case(SnowLevel::Light, Some(20), true)]
    #[case(SnowLevel::Light, Some(21), false)]
    #[case(SnowLevel::Heavy, Some(20), false)]
    #[case(SnowLevel::Heavy, Some(21), true)]
    #[case(SnowLevel::Heavy, None, false)]
    fn test_snow_bands(#[case] level: SnowLevel, #[case] snow: Option<i32>, #[case] expected: bool) {
        let mut location = Location::new("Somewhere", "Colorado");
        location.snow_annual = snow;
        assert_eq!(Filter::Snow(level).matches(&location), expected);
    }

    #[rstest]
    #[case(Some("42"), true)]
    #[case(Some(" 49.9 "), true)]
    #[case(Some("50"), false)]
    #[case(Some("88"), false)]
    #[case(Some("High"), false)]
    #[case(None, false)]
    fn test_lgbtq_friendly(#[case] rating: Option<&str>, #[case] expected: bool) {
        let mut location = Location::new("Asheville", "North Carolina");
        location.lgbtq_rating = rating.map(str::to_string);
        assert_eq!(Filter::LgbtqFriendly.matches(&location), expected);
    }

    #[test]
    fn test_states_in_bucket() {
        let infos = vec![
            StateInfo::new("FL").with_gifford_score("D"),
            StateInfo::new("OR").with_gifford_score("A"),
            StateInfo::new("NY").with_gifford_score("C"),
            StateInfo::new("TX"),
        ];
        assert_eq!(states_in_bucket(&infos, GunLawBucket::Relaxed), HashSet::from(["FL"]));
        assert_eq!(states_in_bucket(&infos, GunLawBucket::Strict), HashSet::from(["OR"]));
        assert_eq!(states_in_bucket(&infos, GunLawBucket::Moderate), HashSet::from(["NY"]));
    }

    #[test]
    fn test_state_filter_joins_full_names_to_codes() {
        let filter = Filter::StateIn(HashSet::from(["FL"]));
        assert!(filter.matches(&Location::new("Sarasota", "Florida")));
        assert!(filter.matches(&Location::new("Sarasota", "FL")));
        assert!(!filter.matches(&Location::new("Bend", "Oregon")));
        assert!(!filter.matches(&Location::new("X", "Y")));
    }

    #[test]
    fn test_build_filters_in_order() {
        let query = ExploreQuery {
            snow: Some(SnowLevel::Zero),
            gun_laws: Some(GunLawBucket::Strict),
            lgbtq_friendly: true,
            ..ExploreQuery::default()
        };
        let filters = build_filters(&query, &[]);
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0], Filter::Snow(SnowLevel::Zero));
        assert_eq!(filters[1], Filter::StateIn(HashSet::new()));
        assert_eq!(filters[2], Filter::LgbtqFriendly);
        assert!(build_filters(&ExploreQuery::default(), &[]).is_empty());
    }
}
