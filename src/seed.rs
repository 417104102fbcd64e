//! Built-in starter locations
//!
//! Lets a fresh install show something before any spreadsheet is imported.

use tracing::info;

use crate::Result;
use crate::models::{CostOfLiving, Location};
use crate::store::RecordStore;

struct SeedLocation {
    name: &'static str,
    state: &'static str,
    match_score: i32,
    avg_price: &'static str,
    climate: &'static str,
    cost_of_living: CostOfLiving,
    population: &'static str,
    tags: &'static [&'static str],
    va_distance: &'static str,
    emoji: &'static str,
    gradient: &'static str,
    featured: bool,
}

const SEED_LOCATIONS: &[SeedLocation] = &[
    SeedLocation {
        name: "Sarasota",
        state: "Florida",
        match_score: 94,
        avg_price: "$385k",
        climate: "Warm",
        cost_of_living: CostOfLiving::Moderate,
        population: "58k",
        tags: &["Beaches", "Golf", "Fishing", "Low Taxes"],
        va_distance: "3 miles",
        emoji: "🏖️",
        gradient: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        featured: true,
    },
    SeedLocation {
        name: "Asheville",
        state: "North Carolina",
        match_score: 91,
        avg_price: "$425k",
        climate: "4 Seasons",
        cost_of_living: CostOfLiving::Moderate,
        population: "94k",
        tags: &["Mountains", "Hiking", "Arts", "Breweries"],
        va_distance: "5 miles",
        emoji: "🏔️",
        gradient: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        featured: false,
    },
    SeedLocation {
        name: "Tucson",
        state: "Arizona",
        match_score: 89,
        avg_price: "$295k",
        climate: "Hot & Dry",
        cost_of_living: CostOfLiving::Low,
        population: "545k",
        tags: &["Desert", "Golf", "Affordable", "Outdoor"],
        va_distance: "2 miles",
        emoji: "🌵",
        gradient: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        featured: false,
    },
    SeedLocation {
        name: "Portland",
        state: "Maine",
        match_score: 87,
        avg_price: "$465k",
        climate: "Cool",
        cost_of_living: CostOfLiving::Moderate,
        population: "67k",
        tags: &["Coastal", "Historic", "Fishing", "Seafood"],
        va_distance: "4 miles",
        emoji: "🌲",
        gradient: "linear-gradient(135deg, #30cfd0 0%, #330867 100%)",
        featured: false,
    },
    SeedLocation {
        name: "Charleston",
        state: "South Carolina",
        match_score: 92,
        avg_price: "$415k",
        climate: "Warm",
        cost_of_living: CostOfLiving::Moderate,
        population: "151k",
        tags: &["Historic", "Beaches", "Culture", "Food"],
        va_distance: "6 miles",
        emoji: "🏛️",
        gradient: "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
        featured: false,
    },
    SeedLocation {
        name: "Nashville",
        state: "Tennessee",
        match_score: 88,
        avg_price: "$375k",
        climate: "Mild",
        cost_of_living: CostOfLiving::Moderate,
        population: "694k",
        tags: &["Music", "No State Tax", "Urban", "Culture"],
        va_distance: "4 miles",
        emoji: "🎸",
        gradient: "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
        featured: false,
    },
];

impl SeedLocation {
    fn to_location(&self) -> Location {
        let mut location = Location::new(self.name, self.state);
        location.match_score = self.match_score;
        location.avg_price = self.avg_price.to_string();
        location.climate = self.climate.to_string();
        location.cost_of_living = self.cost_of_living;
        location.population = self.population.to_string();
        location.tags = self.tags.iter().map(|tag| (*tag).to_string()).collect();
        location.va_distance = self.va_distance.to_string();
        location.emoji = self.emoji.to_string();
        location.gradient = self.gradient.to_string();
        location.featured = self.featured;
        location
    }
}

/// The starter locations as records
#[must_use]
pub fn seed_locations() -> Vec<Location> {
    SEED_LOCATIONS.iter().map(SeedLocation::to_location).collect()
}

/// Replace every stored location with the starter set; returns what was written.
pub fn populate(store: &mut impl RecordStore) -> Result<Vec<Location>> {
    let removed = store.clear_locations()?;
    info!("Cleared {} existing locations", removed);

    let locations = seed_locations();
    for location in &locations {
        store.upsert_location(location.clone())?;
    }
    info!("Populated {} locations", locations.len());
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::{ExploreQuery, SortKey, filter_and_sort};
    use crate::store::MemoryStore;

    #[test]
    fn test_populate_replaces_existing() {
        let mut store = MemoryStore::with_records(vec![Location::new("Bend", "Oregon")], vec![]);
        let written = populate(&mut store).unwrap();

        let stored = store.locations().unwrap();
        assert_eq!(written.len(), 6);
        assert_eq!(stored.len(), 6);
        assert!(stored.iter().all(|l| l.name != "Bend"));
        assert_eq!(stored.iter().filter(|l| l.featured).count(), 1);
    }

    #[test]
    fn test_seed_best_order() {
        let result = filter_and_sort(seed_locations(), &[], &ExploreQuery::default());
        let names: Vec<&str> = result.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sarasota", "Charleston", "Asheville", "Tucson", "Nashville", "Portland"]
        );
    }

    #[test]
    fn test_seed_va_sort_uses_display_distance() {
        let query = ExploreQuery { sort: SortKey::Va, ..ExploreQuery::default() };
        let result = filter_and_sort(seed_locations(), &[], &query);
        assert_eq!(result.locations[0].name, "Tucson");
        assert_eq!(result.locations[5].name, "Charleston");
    }
}
