use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

use crate::{
    VERSION, VetRetireError,
    explore::{self, ExploreParams, ExploreQuery, ExploreResult, sorting},
    models::{Location, StateInfo},
    store::RecordStore,
};

/// Store shared by every request handler
pub type SharedStore = Arc<dyn RecordStore + Send + Sync>;

#[derive(Clone)]
pub struct ApiState {
    pub store: SharedStore,
}

impl ApiState {
    pub fn new(store: impl RecordStore + Send + Sync + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    pub state: String,
    pub county: Option<String>,
    pub match_score: i32,
    pub avg_price: String,
    pub climate: String,
    pub cost_of_living: String,
    pub population: String,
    pub tags: Vec<String>,
    pub va_distance: String,
    pub emoji: String,
    pub gradient: String,
    pub featured: bool,

    pub state_party: Option<String>,
    pub governor: Option<String>,
    pub city_politics: Option<String>,
    pub election_2016: Option<String>,
    pub election_2016_percent: Option<i32>,
    pub election_2024: Option<String>,
    pub election_2024_percent: Option<i32>,
    pub election_change: Option<String>,

    pub population_raw: Option<String>,
    pub density: Option<String>,
    pub sales_tax: Option<String>,
    pub income_tax: Option<String>,
    pub col_index: Option<i32>,

    pub has_va: bool,
    pub nearest_va: Option<String>,
    pub distance_to_va: Option<String>,
    pub va_distance_miles: Option<f64>,
    pub veterans_benefits: Option<String>,

    pub tci: Option<i32>,
    pub marijuana_status: Option<String>,
    pub lgbtq_rating: Option<String>,
    pub tech_hub: Option<String>,
    pub defense_hub: Option<String>,

    pub snow_annual: Option<i32>,
    pub rain_annual: Option<i32>,
    pub sun_days: Option<i32>,
    pub avg_low_winter: Option<i32>,
    pub avg_high_summer: Option<i32>,
    pub humidity_summer: Option<i32>,
    pub climate_detailed: Option<String>,

    pub gas_price: Option<String>,
    pub gas_price_value: Option<f64>,
    pub description: Option<String>,
}

impl From<&Location> for ApiLocation {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            state: location.state.clone(),
            county: location.county.clone(),
            match_score: location.match_score,
            avg_price: location.avg_price.clone(),
            climate: location.climate.clone(),
            cost_of_living: location.cost_of_living.to_string(),
            population: location.population.clone(),
            tags: location.tags.clone(),
            va_distance: location.va_distance.clone(),
            emoji: location.emoji.clone(),
            gradient: location.gradient.clone(),
            featured: location.featured,
            state_party: location.state_party.clone(),
            governor: location.governor.clone(),
            city_politics: location.city_politics.clone(),
            election_2016: location.election_2016.clone(),
            election_2016_percent: location.election_2016_percent,
            election_2024: location.election_2024.clone(),
            election_2024_percent: location.election_2024_percent,
            election_change: location.election_change.clone(),
            population_raw: location.population_raw.clone(),
            density: location.density.clone(),
            sales_tax: location.sales_tax.as_ref().map(ToString::to_string),
            income_tax: location.income_tax.as_ref().map(ToString::to_string),
            col_index: location.col_index,
            has_va: location.has_va_facility(),
            nearest_va: location.nearest_va.clone(),
            distance_to_va: location.distance_to_va.clone(),
            va_distance_miles: sorting::va_distance_miles(location),
            veterans_benefits: location.veterans_benefits.clone(),
            tci: location.tci,
            marijuana_status: location.marijuana_status.clone(),
            lgbtq_rating: location.lgbtq_rating.clone(),
            tech_hub: location.tech_hub.clone(),
            defense_hub: location.defense_hub.clone(),
            snow_annual: location.snow_annual,
            rain_annual: location.rain_annual,
            sun_days: location.sun_days,
            avg_low_winter: location.avg_low_winter,
            avg_high_summer: location.avg_high_summer,
            humidity_summer: location.humidity_summer,
            climate_detailed: location.climate_detailed.clone(),
            gas_price: location.gas_price.clone(),
            gas_price_value: sorting::gas_price(location),
            description: location.description.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiLocationList {
    pub total_results: usize,
    pub locations: Vec<ApiLocation>,
}

impl From<&ExploreResult> for ApiLocationList {
    fn from(result: &ExploreResult) -> Self {
        Self {
            total_results: result.total,
            locations: result.locations.iter().map(ApiLocation::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiStateInfo {
    pub state: String,
    pub name: Option<String>,
    pub gifford_score: Option<String>,
    pub gun_laws: Option<String>,
    pub magazine_limit: Option<String>,
    pub ghost_gun_ban: Option<String>,
    pub assault_weapon_ban: Option<String>,
}

impl From<&StateInfo> for ApiStateInfo {
    fn from(info: &StateInfo) -> Self {
        Self {
            state: info.state.clone(),
            name: crate::models::us_states::state_name(&info.state).map(str::to_string),
            gifford_score: info.gifford_score.clone(),
            gun_laws: info.gun_law_bucket().map(|bucket| bucket.as_str().to_string()),
            magazine_limit: info.magazine_limit.clone(),
            ghost_gun_ban: info.ghost_gun_ban.clone(),
            assault_weapon_ban: info.assault_weapon_ban.clone(),
        }
    }
}

/// Failure while serving a request; always a 500 with a JSON body
pub struct ApiError(VetRetireError);

impl From<VetRetireError> for ApiError {
    fn from(error: VetRetireError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        let body = Json(json!({ "error": self.0.user_message() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/locations", get(get_locations))
        .route("/locations/filter", get(filter_locations))
        .route("/states", get(get_states))
        .route("/health", get(health))
        .with_state(state)
}

async fn get_locations(State(state): State<ApiState>) -> Result<Json<ApiLocationList>, ApiError> {
    let result = explore_blocking(state.store, ExploreQuery::default()).await?;
    Ok(Json(ApiLocationList::from(&result)))
}

async fn filter_locations(
    State(state): State<ApiState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiLocationList>, ApiError> {
    let query = ExploreQuery::from(&ExploreParams::from_pairs(pairs));
    let result = explore_blocking(state.store, query).await?;
    Ok(Json(ApiLocationList::from(&result)))
}

async fn get_states(State(state): State<ApiState>) -> Result<Json<Vec<ApiStateInfo>>, ApiError> {
    let store = state.store;
    let infos = blocking(move || store.state_infos()).await?;
    debug!("Serving {} state info rows", infos.len());
    Ok(Json(infos.iter().map(ApiStateInfo::from).collect()))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

async fn explore_blocking(store: SharedStore, query: ExploreQuery) -> Result<ExploreResult, ApiError> {
    blocking(move || {
        let locations = store.locations()?;
        let state_infos = if query.gun_laws.is_some() {
            store.state_infos()?
        } else {
            Vec::new()
        };
        Ok(explore::filter_and_sort(locations, &state_infos, &query))
    })
    .await
}

/// Run a store read off the async runtime.
async fn blocking<T, F>(read: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> crate::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(read)
        .await
        .map_err(|e| VetRetireError::store(format!("store read task failed: {e}")))?
        .map_err(ApiError::from)
}
