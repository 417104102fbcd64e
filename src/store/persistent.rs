use fjall::Keyspace;
use std::path::Path;
use tracing::debug;

use crate::Result;
use crate::models::{Location, StateInfo};

use super::{Record, RecordStore, Upsert, upsert_row};

/// fjall-backed store; each table is one postcard-encoded snapshot
pub struct FjallStore {
    records: Keyspace,
}

impl FjallStore {
    /// Open (or create) the database directory at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = fjall::Database::builder(path.as_ref()).open()?;
        let records = db.keyspace("records", fjall::KeyspaceCreateOptions::default)?;
        Ok(FjallStore { records })
    }

    #[tracing::instrument(name = "load_table", level = "debug", skip(self), fields(table = R::TABLE))]
    fn load<R: Record>(&self) -> Result<Vec<R>> {
        match self.records.get(R::TABLE)? {
            Some(bytes) => {
                let rows: Vec<R> = postcard::from_bytes(&bytes)?;
                debug!("Loaded {} rows", rows.len());
                Ok(rows)
            }
            None => {
                debug!("Table not found, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save<R: Record>(&self, rows: &[R]) -> Result<()> {
        let bytes = postcard::to_stdvec(rows)?;
        self.records.insert(R::TABLE, bytes)?;
        Ok(())
    }

    fn upsert<R: Record>(&self, record: R) -> Result<Upsert> {
        let mut rows = self.load::<R>()?;
        let outcome = upsert_row(&mut rows, record);
        self.save(&rows)?;
        Ok(outcome)
    }

    fn clear<R: Record>(&self) -> Result<usize> {
        let removed = self.load::<R>()?.len();
        self.records.remove(R::TABLE)?;
        Ok(removed)
    }
}

impl RecordStore for FjallStore {
    fn locations(&self) -> Result<Vec<Location>> {
        self.load()
    }

    fn state_infos(&self) -> Result<Vec<StateInfo>> {
        let mut infos: Vec<StateInfo> = self.load()?;
        infos.sort_by(|a, b| a.state.cmp(&b.state));
        Ok(infos)
    }

    fn upsert_location(&mut self, location: Location) -> Result<Upsert> {
        self.upsert(location)
    }

    fn upsert_state_info(&mut self, info: StateInfo) -> Result<Upsert> {
        self.upsert(info)
    }

    fn clear_locations(&mut self) -> Result<usize> {
        self.clear::<Location>()
    }

    fn clear_state_infos(&mut self) -> Result<usize> {
        self.clear::<StateInfo>()
    }
}
