use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use swallow_core::{AgreementLevel, AgreementPair};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MatrixResponse {
    keys: Vec<String>,
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

#[derive(Serialize)]
pub struct PairResponse {
    a: String,
    b: String,
    percent: f64,
    level: AgreementLevel,
    /// Recomputed from patient change labels; for cross-checking only.
    derived_percent: f64,
}

pub async fn get_matrix(State(state): State<AppState>) -> Json<MatrixResponse> {
    let measures = state.cohort.measures();
    Json(MatrixResponse {
        keys: measures.iter().map(|m| m.key.clone()).collect(),
        labels: measures.iter().map(|m| m.label.clone()).collect(),
        rows: state.cohort.agreement_matrix().rows().to_vec(),
    })
}

pub async fn ranked_pairs(State(state): State<AppState>) -> Json<Vec<AgreementPair>> {
    Json(state.cohort.ranked_agreement_pairs())
}

pub async fn get_pair(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> Result<Json<PairResponse>, ApiError> {
    let percent = state.cohort.agreement(&a, &b)?;
    let derived_percent = state.cohort.derived_agreement(&a, &b)?;
    Ok(Json(PairResponse {
        a,
        b,
        percent,
        level: AgreementLevel::of(percent),
        derived_percent,
    }))
}
