use crate::Result;
use crate::models::{Location, StateInfo};

use super::{RecordStore, Upsert, upsert_row};

/// Non-persistent store, used by tests and one-off runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    locations: Vec<Location>,
    state_infos: Vec<StateInfo>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store already holding the given rows (upserted in order)
    #[must_use]
    pub fn with_records(locations: Vec<Location>, state_infos: Vec<StateInfo>) -> Self {
        let mut store = Self::new();
        for location in locations {
            upsert_row(&mut store.locations, location);
        }
        for info in state_infos {
            upsert_row(&mut store.state_infos, info);
        }
        store
    }
}

impl RecordStore for MemoryStore {
    fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn state_infos(&self) -> Result<Vec<StateInfo>> {
        let mut infos = self.state_infos.clone();
        infos.sort_by(|a, b| a.state.cmp(&b.state));
        Ok(infos)
    }

    fn upsert_location(&mut self, location: Location) -> Result<Upsert> {
        Ok(upsert_row(&mut self.locations, location))
    }

    fn upsert_state_info(&mut self, info: StateInfo) -> Result<Upsert> {
        Ok(upsert_row(&mut self.state_infos, info))
    }

    fn clear_locations(&mut self) -> Result<usize> {
        let removed = self.locations.len();
        self.locations.clear();
        Ok(removed)
    }

    fn clear_state_infos(&mut self) -> Result<usize> {
        let removed = self.state_infos.len();
        self.state_infos.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_infos_are_ordered_by_code() {
        let store = MemoryStore::with_records(
            vec![],
            vec![StateInfo::new("OR"), StateInfo::new("FL"), StateInfo::new("NY")],
        );
        let codes: Vec<String> = store
            .state_infos()
            .unwrap()
            .into_iter()
            .map(|info| info.state)
            .collect();
        assert_eq!(codes, vec!["FL", "NY", "OR"]);
    }

    #[test]
    fn test_clear_reports_removed_count() {
        let mut store = MemoryStore::with_records(
            vec![Location::new("Bend", "Oregon"), Location::new("Tucson", "Arizona")],
            vec![StateInfo::new("OR")],
        );
        assert_eq!(store.clear_locations().unwrap(), 2);
        assert!(store.locations().unwrap().is_empty());
        assert_eq!(store.state_infos().unwrap().len(), 1);
    }
}
