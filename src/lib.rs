//! `VetRetire` - Retirement location explorer for veterans
//!
//! This library provides CSV ingestion of location and state gun-law data,
//! the record store, the filter/sort pipeline behind the explore views and
//! the JSON API serving them.

pub mod api;
pub mod config;
pub mod error;
pub mod explore;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod seed;
pub mod store;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::VetRetireError;
pub use explore::{ExploreQuery, ExploreResult, filter_and_sort};
pub use models::{CostOfLiving, GunLawBucket, Location, StateInfo};
pub use store::{FjallStore, MemoryStore, RecordStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, VetRetireError>;
