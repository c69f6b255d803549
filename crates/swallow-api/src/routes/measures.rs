use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use swallow_core::models::{Category, Change, ChangeCounts, Measure};
use swallow_core::summary::SeverityProfile;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MeasureSummary {
    key: String,
    label: String,
    full_name: String,
    category: Category,
    category_label: &'static str,
    scale: String,
    direction: String,
    mcid: f64,
    p_value: String,
}

#[derive(Deserialize)]
pub struct NormalizeQuery {
    score: f64,
}

#[derive(Serialize)]
pub struct NormalizeResponse {
    key: String,
    score: f64,
    severity: f64,
}

#[derive(Deserialize)]
pub struct ClassifyQuery {
    pre: f64,
    post: f64,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    key: String,
    pre: f64,
    post: f64,
    diff: f64,
    mcid: f64,
    change: Change,
}

#[derive(Serialize)]
pub struct OutcomeSummary {
    key: String,
    counts: ChangeCounts,
    worsening_rate: f64,
    normalized_means: SeverityProfile,
    mean_worsening: f64,
    p_value: String,
}

pub async fn list_measures(State(state): State<AppState>) -> Json<Vec<MeasureSummary>> {
    let measures = state
        .cohort
        .measures()
        .iter()
        .map(|m| MeasureSummary {
            key: m.key.clone(),
            label: m.label.clone(),
            full_name: m.full_name.clone(),
            category: m.category,
            category_label: m.category.label(),
            scale: m.scale(),
            direction: m.direction.clone(),
            mcid: m.mcid,
            p_value: m.p_value.clone(),
        })
        .collect();
    Json(measures)
}

pub async fn get_measure(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Measure>, ApiError> {
    Ok(Json(state.cohort.measure(&key)?.clone()))
}

pub async fn normalize(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<NormalizeQuery>,
) -> Result<Json<NormalizeResponse>, ApiError> {
    let severity = state.cohort.normalize_checked(&key, query.score)?;
    Ok(Json(NormalizeResponse {
        key,
        score: query.score,
        severity,
    }))
}

pub async fn classify(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let change = state
        .cohort
        .classify_change_checked(&key, query.pre, query.post)?;
    let measure = state.cohort.measure(&key)?;
    Ok(Json(ClassifyResponse {
        pre: query.pre,
        post: query.post,
        diff: query.post - query.pre,
        mcid: measure.mcid,
        change,
        key,
    }))
}

pub async fn outcome_summary(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<OutcomeSummary>, ApiError> {
    let cohort = &state.cohort;
    let measure = cohort.measure(&key)?;
    Ok(Json(OutcomeSummary {
        counts: cohort.change_counts(&key)?,
        worsening_rate: cohort.worsening_rate(&key)?,
        normalized_means: cohort.normalized_means(&key)?,
        mean_worsening: cohort.mean_worsening(&key)?,
        p_value: measure.p_value.clone(),
        key,
    }))
}
