//! State info CSV rows

use serde::Deserialize;

use super::CsvImport;
use super::cleaning::clean_empty;
use crate::models::{StateInfo, us_states};
use crate::store::{RecordStore, Upsert};
use crate::{Result, VetRetireError};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StateInfoRow {
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "MagazineLimit")]
    pub magazine_limit: Option<String>,
    #[serde(rename = "GiffordScore")]
    pub gifford_score: Option<String>,
    #[serde(rename = "GhostGunBan")]
    pub ghost_gun_ban: Option<String>,
    #[serde(rename = "AssaultWeaponBan")]
    pub assault_weapon_ban: Option<String>,
}

impl StateInfoRow {
    /// Clean the row into a [`StateInfo`] keyed by USPS code.
    ///
    /// A blank state yields `Ok(None)`; a state that is neither a known code
    /// nor a known name is an error for this row.
    pub fn into_state_info(self) -> Result<Option<StateInfo>> {
        let Some(state) = clean_empty(self.state.as_deref()) else {
            return Ok(None);
        };
        let code = us_states::state_code(&state)
            .ok_or_else(|| VetRetireError::import(format!("unknown state '{state}'")))?;

        let mut info = StateInfo::new(code);
        info.magazine_limit = clean_empty(self.magazine_limit.as_deref());
        info.gifford_score = clean_empty(self.gifford_score.as_deref());
        info.ghost_gun_ban = clean_empty(self.ghost_gun_ban.as_deref());
        info.assault_weapon_ban = clean_empty(self.assault_weapon_ban.as_deref());
        Ok(Some(info))
    }
}

/// `import-states`
pub struct StateInfoImport;

impl CsvImport for StateInfoImport {
    type Row = StateInfoRow;
    type Record = StateInfo;

    const ENTITY: &'static str = "state info";

    fn parse_row(row: StateInfoRow) -> Result<Option<StateInfo>> {
        row.into_state_info()
    }

    fn upsert(store: &mut impl RecordStore, record: StateInfo) -> Result<Upsert> {
        store.upsert_state_info(record)
    }

    fn clear(store: &mut impl RecordStore) -> Result<usize> {
        store.clear_state_infos()
    }
}
