//! CSV ingestion
//!
//! Reads a CSV file row by row into fixed-shape row structs, cleans them into
//! records and upserts each one by natural key. A bad row is recorded and
//! skipped; only whole-file failures abort an import.

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::store::{Record, RecordStore, Upsert};
use crate::{Result, VetRetireError};

pub mod cleaning;
pub mod locations;
pub mod states;

pub use locations::{LocationImport, LocationRow};
pub use states::{StateInfoImport, StateInfoRow};

/// The header occupies row 1, so the first data row is row 2.
pub const FIRST_DATA_ROW: usize = 2;

/// One importable entity type: how its CSV rows look and where they are stored
pub trait CsvImport {
    type Row: DeserializeOwned;
    type Record: Record;

    /// Plural name used in progress messages ("locations")
    const ENTITY: &'static str;

    /// Clean a row into a record. `Ok(None)` means the row has no identity and
    /// is skipped without counting as an error.
    fn parse_row(row: Self::Row) -> Result<Option<Self::Record>>;

    fn upsert(store: &mut impl RecordStore, record: Self::Record) -> Result<Upsert>;

    fn clear(store: &mut impl RecordStore) -> Result<usize>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Delete every existing record of the entity type first
    pub clear: bool,
}

/// What happened to one data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Created { row: usize, label: String },
    Updated { row: usize, label: String },
    Skipped { row: usize },
    Failed { row: usize, message: String },
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOutcome::Created { label, .. } => write!(f, "  + Created: {label}"),
            RowOutcome::Updated { label, .. } => write!(f, "  ~ Updated: {label}"),
            RowOutcome::Skipped { row } => write!(f, "  - Skipped row {row}: no identity"),
            RowOutcome::Failed { row, message } => write!(f, "  X Error on row {row}: {message}"),
        }
    }
}

/// Summary of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub cleared: usize,
    pub outcomes: Vec<RowOutcome>,
}

impl ImportReport {
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Created { .. }))
    }

    #[must_use]
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Updated { .. }))
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Failed { .. }))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RowOutcome::Skipped { .. }))
    }

    fn push(&mut self, outcome: RowOutcome) {
        self.outcomes.push(outcome);
    }

    fn count(&self, predicate: impl Fn(&RowOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }

    /// Final one-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Import complete! Created: {}, Updated: {}, Errors: {}",
            self.created(),
            self.updated(),
            self.errors()
        )
    }
}

/// Import a CSV file into `store`.
///
/// With `options.clear` the table is emptied before the file is opened.
pub fn import_file<I, S>(store: &mut S, path: &Path, options: ImportOptions) -> Result<ImportReport>
where
    I: CsvImport,
    S: RecordStore,
{
    let cleared = if options.clear {
        let removed = I::clear(store)?;
        info!("Cleared {} existing {}", removed, I::ENTITY);
        removed
    } else {
        0
    };

    info!("Importing {} from: {}", I::ENTITY, path.display());
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VetRetireError::file_not_found(path.display().to_string()),
        _ => VetRetireError::from(e),
    })?;

    let mut report = import_reader::<I, _, _>(store, file)?;
    report.cleared = cleared;
    Ok(report)
}

/// Import CSV data from any reader. The first line must be the header.
pub fn import_reader<I, S, R>(store: &mut S, reader: R) -> Result<ImportReport>
where
    I: CsvImport,
    S: RecordStore,
    R: Read,
{
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| VetRetireError::validation(format!("Failed to read CSV header: {e}")))?;
    debug!("CSV columns: {:?}", headers);

    let mut report = ImportReport::default();

    for (index, result) in csv_reader.deserialize::<I::Row>().enumerate() {
        let row = index + FIRST_DATA_ROW;

        let parsed = match result {
            Ok(parsed) => parsed,
            Err(e) if e.is_io_error() => {
                return Err(VetRetireError::validation(format!(
                    "Failed to read CSV at row {row}: {e}"
                )));
            }
            Err(e) => {
                report.push(fail(row, e.to_string()));
                continue;
            }
        };

        let outcome = match import_row::<I, S>(store, parsed) {
            Ok(Some((Upsert::Created, label))) => RowOutcome::Created { row, label },
            Ok(Some((Upsert::Updated, label))) => RowOutcome::Updated { row, label },
            Ok(None) => RowOutcome::Skipped { row },
            Err(e) => fail(row, e.to_string()),
        };
        report.push(outcome);
    }

    info!(
        "Imported {}: created {}, updated {}, skipped {}, errors {}",
        I::ENTITY,
        report.created(),
        report.updated(),
        report.skipped(),
        report.errors()
    );

    Ok(report)
}

fn import_row<I, S>(store: &mut S, row: I::Row) -> Result<Option<(Upsert, String)>>
where
    I: CsvImport,
    S: RecordStore,
{
    let Some(record) = I::parse_row(row)? else {
        return Ok(None);
    };
    let label = record.natural_key().to_string();
    let upsert = I::upsert(store, record)?;
    Ok(Some((upsert, label)))
}

fn fail(row: usize, message: String) -> RowOutcome {
    warn!("Error on row {}: {}", row, message);
    RowOutcome::Failed { row, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_report_counts_and_summary() {
        let report = ImportReport {
            cleared: 0,
            outcomes: vec![
                RowOutcome::Created { row: 2, label: "Bend, Oregon".to_string() },
                RowOutcome::Updated { row: 3, label: "Tucson, Arizona".to_string() },
                RowOutcome::Skipped { row: 4 },
                RowOutcome::Failed { row: 5, message: "boom".to_string() },
            ],
        };
        assert_eq!(report.created(), 1);
        assert_eq!(report.updated(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.errors(), 1);
        assert_eq!(report.summary(), "Import complete! Created: 1, Updated: 1, Errors: 1");
    }

    #[test]
    fn test_outcome_lines() {
        let created = RowOutcome::Created { row: 2, label: "Bend, Oregon".to_string() };
        assert_eq!(created.to_string(), "  + Created: Bend, Oregon");
        let failed = RowOutcome::Failed { row: 7, message: "bad".to_string() };
        assert_eq!(failed.to_string(), "  X Error on row 7: bad");
    }

    #[test]
    fn test_missing_file_is_distinct_error() {
        let mut store = MemoryStore::new();
        let result = import_file::<LocationImport, _>(
            &mut store,
            Path::new("/definitely/not/here.csv"),
            ImportOptions::default(),
        );
        assert!(matches!(result, Err(VetRetireError::FileNotFound { .. })));
    }

    #[test]
    fn test_clear_runs_even_when_file_is_missing() {
        let mut store = MemoryStore::with_records(
            vec![crate::models::Location::new("Bend", "Oregon")],
            vec![],
        );
        let result = import_file::<LocationImport, _>(
            &mut store,
            Path::new("/definitely/not/here.csv"),
            ImportOptions { clear: true },
        );
        assert!(result.is_err());
        assert!(store.locations().unwrap().is_empty());
    }

    #[test]
    fn test_short_row_fills_missing_cells_with_null() {
        let data = "City,State,Snow,Gas\nSarasota,Florida,0,$3.89\nBend,Oregon\n";
        let mut store = MemoryStore::new();
        let report = import_reader::<LocationImport, _, _>(&mut store, data.as_bytes()).unwrap();

        assert_eq!(report.created(), 2);
        assert_eq!(report.errors(), 0);
        let locations = store.locations().unwrap();
        assert_eq!(locations[1].name, "Bend");
        assert_eq!(locations[1].snow_annual, None);
        assert_eq!(locations[1].gas_price, None);
    }

    #[test]
    fn test_malformed_row_is_counted_and_import_continues() {
        let data: &[u8] = b"City,State,Snow\nSarasota,Florida,0\nBro\xffken,Row,1\nBend,Oregon,40\n";
        let mut store = MemoryStore::new();
        let report = import_reader::<LocationImport, _, _>(&mut store, data).unwrap();

        assert_eq!(report.created(), 2);
        assert_eq!(report.errors(), 1);
        assert!(matches!(report.outcomes[1], RowOutcome::Failed { row: 3, .. }));
        assert_eq!(store.locations().unwrap().len(), 2);
    }
}
