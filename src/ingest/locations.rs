//! Location CSV rows

use serde::Deserialize;

use super::CsvImport;
use super::cleaning::{clean_empty, parse_decimal, parse_int};
use crate::Result;
use crate::models::Location;
use crate::store::{RecordStore, Upsert};

/// One row of the locations spreadsheet, exactly as exported
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocationRow {
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "County")]
    pub county: Option<String>,
    #[serde(rename = "Climate")]
    pub climate: Option<String>,

    #[serde(rename = "StateParty")]
    pub state_party: Option<String>,
    #[serde(rename = "Governor")]
    pub governor: Option<String>,
    #[serde(rename = "CityPolitics")]
    pub city_politics: Option<String>,
    #[serde(rename = "2016Election")]
    pub election_2016: Option<String>,
    #[serde(rename = "2016PresidentPercent")]
    pub election_2016_percent: Option<String>,
    #[serde(rename = "2024 Election")]
    pub election_2024: Option<String>,
    #[serde(rename = "2024PresidentPercent")]
    pub election_2024_percent: Option<String>,
    #[serde(rename = "ElectionChange")]
    pub election_change: Option<String>,

    #[serde(rename = "Population")]
    pub population: Option<String>,
    #[serde(rename = "Density")]
    pub density: Option<String>,
    #[serde(rename = "Sales Tax")]
    pub sales_tax: Option<String>,
    #[serde(rename = "Income")]
    pub income_tax: Option<String>,
    #[serde(rename = "COL")]
    pub col_index: Option<String>,

    #[serde(rename = "VA")]
    pub has_va: Option<String>,
    #[serde(rename = "NearestVA")]
    pub nearest_va: Option<String>,
    #[serde(rename = "DistanceToVA")]
    pub distance_to_va: Option<String>,
    #[serde(rename = "Veterans Benefits")]
    pub veterans_benefits: Option<String>,

    #[serde(rename = "TCI")]
    pub tci: Option<String>,
    #[serde(rename = "Marijuana")]
    pub marijuana: Option<String>,
    #[serde(rename = "LGBTQ")]
    pub lgbtq: Option<String>,
    #[serde(rename = "TechHub")]
    pub tech_hub: Option<String>,
    #[serde(rename = "DefenseHub")]
    pub defense_hub: Option<String>,

    #[serde(rename = "Snow")]
    pub snow: Option<String>,
    #[serde(rename = "Rain")]
    pub rain: Option<String>,
    #[serde(rename = "Sun")]
    pub sun: Option<String>,
    #[serde(rename = "ALW")]
    pub avg_low_winter: Option<String>,
    #[serde(rename = "AHS")]
    pub avg_high_summer: Option<String>,
    #[serde(rename = "HumiditySummer")]
    pub humidity_summer: Option<String>,

    #[serde(rename = "Gas")]
    pub gas: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

impl LocationRow {
    /// Clean the row into a [`Location`]; `None` when city or state is missing.
    ///
    /// Display fields the spreadsheet does not carry are reset to their
    /// defaults, so re-importing a row fully replaces the stored record.
    #[must_use]
    pub fn into_location(self) -> Option<Location> {
        let name = clean_empty(self.city.as_deref())?;
        let state = clean_empty(self.state.as_deref())?;

        let climate = clean_empty(self.climate.as_deref());
        let distance_to_va = clean_empty(self.distance_to_va.as_deref());

        let mut location = Location::new(name, state);
        location.county = clean_empty(self.county.as_deref());
        location.climate = climate.clone().unwrap_or_default();
        location.climate_detailed = climate;
        location.va_distance = distance_to_va.clone().unwrap_or_else(|| "NA".to_string());

        location.state_party = clean_empty(self.state_party.as_deref());
        location.governor = clean_empty(self.governor.as_deref());
        location.city_politics = clean_empty(self.city_politics.as_deref());
        location.election_2016 = clean_empty(self.election_2016.as_deref());
        location.election_2016_percent = parse_int(self.election_2016_percent.as_deref());
        location.election_2024 = clean_empty(self.election_2024.as_deref());
        location.election_2024_percent = parse_int(self.election_2024_percent.as_deref());
        location.election_change = clean_empty(self.election_change.as_deref());

        location.population_raw = clean_empty(self.population.as_deref());
        location.density = clean_empty(self.density.as_deref());
        location.sales_tax = parse_decimal(self.sales_tax.as_deref());
        location.income_tax = parse_decimal(self.income_tax.as_deref());
        location.col_index = parse_int(self.col_index.as_deref());

        location.has_va = clean_empty(self.has_va.as_deref());
        location.nearest_va = clean_empty(self.nearest_va.as_deref());
        location.distance_to_va = distance_to_va;
        location.veterans_benefits = clean_empty(self.veterans_benefits.as_deref());

        location.tci = parse_int(self.tci.as_deref());
        location.marijuana_status = clean_empty(self.marijuana.as_deref());
        location.lgbtq_rating = clean_empty(self.lgbtq.as_deref());
        location.tech_hub = clean_empty(self.tech_hub.as_deref());
        location.defense_hub = clean_empty(self.defense_hub.as_deref());

        location.snow_annual = parse_int(self.snow.as_deref());
        location.rain_annual = parse_int(self.rain.as_deref());
        location.sun_days = parse_int(self.sun.as_deref());
        location.avg_low_winter = parse_int(self.avg_low_winter.as_deref());
        location.avg_high_summer = parse_int(self.avg_high_summer.as_deref());
        location.humidity_summer = parse_int(self.humidity_summer.as_deref());

        location.gas_price = clean_empty(self.gas.as_deref());
        location.description = clean_empty(self.description.as_deref());

        Some(location)
    }
}

/// `import-locations`
pub struct LocationImport;

impl CsvImport for LocationImport {
    type Row = LocationRow;
    type Record = Location;

    const ENTITY: &'static str = "locations";

    fn parse_row(row: LocationRow) -> Result<Option<Location>> {
        Ok(row.into_location())
    }

    fn upsert(store: &mut impl RecordStore, record: Location) -> Result<Upsert> {
        store.upsert_location(record)
    }

    fn clear(store: &mut impl RecordStore) -> Result<usize> {
        store.clear_locations()
    }
}
