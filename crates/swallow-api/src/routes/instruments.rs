use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use swallow_instruments::scoring::{Item, ScoreResult};
use swallow_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    max_score: u32,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    max_score: u32,
    items: Vec<Item>,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    /// Selected option index for each item, in item order.
    responses: Vec<usize>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    result: ScoreResult,
    /// Score as percent of worst possible on the cohort measure.
    severity: f64,
    /// Cohort patients whose post-op score is at or above this one.
    patients_at_or_above: Vec<u32>,
    at_or_above_count: usize,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            max_score: i.max_score(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        max_score: instrument.max_score(),
        items: instrument.items().to_vec(),
    }))
}

pub async fn score_instrument(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let instrument = get_instrument(&id)?;
    let result = instrument.score(&req.responses)?;
    let score = f64::from(result.score);
    let severity = state.cohort.normalize(&id, score)?;
    let patients_at_or_above = state.cohort.patients_at_or_above(&id, score)?;
    Ok(Json(ScoreResponse {
        result,
        severity,
        at_or_above_count: patients_at_or_above.len(),
        patients_at_or_above,
    }))
}
