//! Filter/sort pipeline behind the explore and filter views
//!
//! Filters never fail on odd stored data: a value that cannot be read is
//! treated as not matching, and sorts put it last.

use serde::Serialize;
use tracing::debug;

use crate::models::{Location, StateInfo};

pub mod filters;
pub mod numeric;
pub mod query;
pub mod sorting;

pub use filters::{Filter, build_filters};
pub use query::{ExploreParams, ExploreQuery, SnowLevel, SortKey};
pub use sorting::sort_locations;

/// Filtered and ordered locations
#[derive(Debug, Clone, Serialize)]
pub struct ExploreResult {
    pub locations: Vec<Location>,
    pub total: usize,
}

/// Apply every filter in `query`, then its sort.
#[must_use]
pub fn filter_and_sort(
    locations: Vec<Location>,
    state_infos: &[StateInfo],
    query: &ExploreQuery,
) -> ExploreResult {
    let filters = build_filters(query, state_infos);
    let before = locations.len();

    let mut locations: Vec<Location> = locations
        .into_iter()
        .filter(|location| filters.iter().all(|filter| filter.matches(location)))
        .collect();
    sort_locations(&mut locations, query.sort);

    debug!(
        "Explore query {:?}: {} of {} locations",
        query,
        locations.len(),
        before
    );

    let total = locations.len();
    ExploreResult { locations, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GunLawBucket;

    fn location(name: &str, state: &str, snow: Option<i32>) -> Location {
        let mut location = Location::new(name, state);
        location.snow_annual = snow;
        location
    }

    fn names(result: &ExploreResult) -> Vec<&str> {
        result.locations.iter().map(|l| l.name.as_str()).collect()
    }

    fn sample() -> Vec<Location> {
        vec![
            location("Sarasota", "Florida", Some(0)),
            location("Bend", "Oregon", Some(40)),
            location("X", "Y", None),
        ]
    }

    fn gifford() -> Vec<StateInfo> {
        vec![
            StateInfo::new("FL").with_gifford_score("D"),
            StateInfo::new("OR").with_gifford_score("A"),
            StateInfo::new("NY").with_gifford_score("C"),
        ]
    }

    #[test]
    fn test_no_query_keeps_everything() {
        let result = filter_and_sort(sample(), &[], &ExploreQuery::default());
        assert_eq!(result.total, 3);
        assert_eq!(names(&result), vec!["Bend", "Sarasota", "X"]);
    }

    #[test]
    fn test_snow_zero_and_lots() {
        let zero = ExploreQuery { snow: Some(SnowLevel::Zero), ..ExploreQuery::default() };
        let result = filter_and_sort(sample(), &[], &zero);
        assert_eq!(names(&result), vec!["Sarasota", "X"]);

        let lots = ExploreQuery { snow: Some(SnowLevel::Heavy), ..ExploreQuery::default() };
        let result = filter_and_sort(sample(), &[], &lots);
        assert_eq!(names(&result), vec!["Bend"]);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn test_gun_law_buckets() {
        let mut locations = sample();
        locations.push(location("Buffalo", "New York", Some(95)));

        let query = |bucket| ExploreQuery { gun_laws: Some(bucket), ..ExploreQuery::default() };

        let relaxed = filter_and_sort(locations.clone(), &gifford(), &query(GunLawBucket::Relaxed));
        assert_eq!(names(&relaxed), vec!["Sarasota"]);

        let strict = filter_and_sort(locations.clone(), &gifford(), &query(GunLawBucket::Strict));
        assert_eq!(names(&strict), vec!["Bend"]);

        let some = filter_and_sort(locations, &gifford(), &query(GunLawBucket::Moderate));
        assert_eq!(names(&some), vec!["Buffalo"]);
    }

    #[test]
    fn test_filters_are_and_combined() {
        let mut locations = sample();
        locations[0].lgbtq_rating = Some("30".to_string());
        locations[1].lgbtq_rating = Some("20".to_string());

        let query = ExploreQuery {
            snow: Some(SnowLevel::Zero),
            lgbtq_friendly: true,
            ..ExploreQuery::default()
        };
        let result = filter_and_sort(locations, &gifford(), &query);
        assert_eq!(names(&result), vec!["Sarasota"]);
    }
}
