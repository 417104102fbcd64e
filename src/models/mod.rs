//! Data models for the VetRetire application
//!
//! - Location: one retirement destination (city)
//! - StateInfo: per-state gun laws and regulations
//! - us_states: name ↔ USPS code directory joining the two

pub mod decimal;
pub mod location;
pub mod state_info;
pub mod us_states;

pub use location::{CostOfLiving, Location, LocationKey};
pub use state_info::{GunLawBucket, StateInfo};
