//! Sort orders as ordered comparator lists
//!
//! Each [`SortKey`] maps to comparators applied in sequence until one breaks
//! the tie. Sorting is stable, so records equal under every comparator keep
//! their input order.

use std::cmp::Ordering;

use super::numeric::{first_number, first_number_in};
use super::query::SortKey;
use crate::models::Location;

pub type Comparator = fn(&Location, &Location) -> Ordering;

const BEST: &[Comparator] = &[by_match_score_desc, by_name];
const COST_ASC: &[Comparator] = &[by_cost_asc, by_name];
const COST_DESC: &[Comparator] = &[by_cost_desc, by_name];
const CLIMATE: &[Comparator] = &[by_climate, by_name];
const VA: &[Comparator] = &[by_has_va_first, by_va_distance];
const GAS_ASC: &[Comparator] = &[by_gas_asc];
const GAS_DESC: &[Comparator] = &[by_gas_desc];

impl SortKey {
    #[must_use]
    pub fn comparators(self) -> &'static [Comparator] {
        match self {
            SortKey::Best => BEST,
            SortKey::CostAsc => COST_ASC,
            SortKey::CostDesc => COST_DESC,
            SortKey::Climate => CLIMATE,
            SortKey::Va => VA,
            SortKey::GasAsc => GAS_ASC,
            SortKey::GasDesc => GAS_DESC,
        }
    }
}

/// Stable sort of `locations` by `key`
pub fn sort_locations(locations: &mut [Location], key: SortKey) {
    let comparators = key.comparators();
    locations.sort_by(|a, b| {
        comparators
            .iter()
            .fold(Ordering::Equal, |ordering, compare| ordering.then_with(|| compare(a, b)))
    });
}

fn by_match_score_desc(a: &Location, b: &Location) -> Ordering {
    b.match_score.cmp(&a.match_score)
}

fn by_name(a: &Location, b: &Location) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_cost_asc(a: &Location, b: &Location) -> Ordering {
    a.cost_of_living.rank().cmp(&b.cost_of_living.rank())
}

fn by_cost_desc(a: &Location, b: &Location) -> Ordering {
    by_cost_asc(b, a)
}

fn by_climate(a: &Location, b: &Location) -> Ordering {
    a.climate.cmp(&b.climate)
}

fn by_has_va_first(a: &Location, b: &Location) -> Ordering {
    b.has_va_facility().cmp(&a.has_va_facility())
}

fn by_va_distance(a: &Location, b: &Location) -> Ordering {
    missing_last(va_distance_miles(a), va_distance_miles(b), false)
}

fn by_gas_asc(a: &Location, b: &Location) -> Ordering {
    missing_last(gas_price(a), gas_price(b), false)
}

fn by_gas_desc(a: &Location, b: &Location) -> Ordering {
    missing_last(gas_price(a), gas_price(b), true)
}

/// Distance to the nearest VA facility; `distance_to_va` first, then the
/// display `va_distance`.
#[must_use]
pub fn va_distance_miles(location: &Location) -> Option<f64> {
    first_number_in(location.distance_to_va.as_deref())
        .or_else(|| first_number(&location.va_distance))
}

#[must_use]
pub fn gas_price(location: &Location) -> Option<f64> {
    first_number_in(location.gas_price.as_deref())
}

/// Compare two optional values with `None` after every value in either direction.
fn missing_last(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
