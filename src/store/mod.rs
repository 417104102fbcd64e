//! Record store
//!
//! Two tables, locations and state info, each addressed by its natural key.
//! Tables are small, so both backends keep a table as one ordered snapshot and
//! upserts rewrite the snapshot.

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::{Debug, Display};

use crate::Result;
use crate::models::{Location, LocationKey, StateInfo};

pub mod memory;
pub mod persistent;

pub use memory::MemoryStore;
pub use persistent::FjallStore;

/// Whether an upsert created a new record or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// A row type stored in its own table
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + 'static {
    type Key: PartialEq + Display;

    /// Table name, also the storage key of the snapshot
    const TABLE: &'static str;

    fn natural_key(&self) -> Self::Key;

    /// Keep identity metadata of the record being replaced
    fn inherit_from(&mut self, previous: &Self);
}

impl Record for Location {
    type Key = LocationKey;
    const TABLE: &'static str = "locations";

    fn natural_key(&self) -> LocationKey {
        self.key()
    }

    fn inherit_from(&mut self, previous: &Self) {
        self.created_at = previous.created_at;
    }
}

impl Record for StateInfo {
    type Key = String;
    const TABLE: &'static str = "state_info";

    fn natural_key(&self) -> String {
        self.state.clone()
    }

    fn inherit_from(&mut self, previous: &Self) {
        self.created_at = previous.created_at;
    }
}

/// Replace the row with the same natural key, or append.
///
/// Replacement is total: every field comes from `record` except what
/// [`Record::inherit_from`] carries over.
pub(crate) fn upsert_row<R: Record>(rows: &mut Vec<R>, mut record: R) -> Upsert {
    let key = record.natural_key();
    match rows.iter_mut().find(|row| row.natural_key() == key) {
        Some(existing) => {
            record.inherit_from(existing);
            *existing = record;
            Upsert::Updated
        }
        None => {
            rows.push(record);
            Upsert::Created
        }
    }
}

/// Storage for locations and state info
pub trait RecordStore {
    /// All locations in insertion order
    fn locations(&self) -> Result<Vec<Location>>;

    /// All state info rows ordered by state code
    fn state_infos(&self) -> Result<Vec<StateInfo>>;

    fn upsert_location(&mut self, location: Location) -> Result<Upsert>;

    fn upsert_state_info(&mut self, info: StateInfo) -> Result<Upsert>;

    /// Delete every location, returning how many were removed
    fn clear_locations(&mut self) -> Result<usize>;

    /// Delete every state info row, returning how many were removed
    fn clear_state_infos(&mut self) -> Result<usize>;
}
