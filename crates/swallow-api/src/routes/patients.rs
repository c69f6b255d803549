use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use swallow_core::models::{Change, ChangeCounts, Patient, SeverityPoint};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PatientFilter {
    change: Option<Change>,
}

#[derive(Serialize)]
pub struct PatientList {
    /// Cohort-wide counts by primary-measure change, regardless of filter.
    counts: ChangeCounts,
    patients: Vec<Patient>,
}

#[derive(Serialize)]
pub struct PatientDetail {
    patient: Patient,
    profile: Vec<SeverityPoint>,
}

pub async fn list_patients(
    State(state): State<AppState>,
    Query(filter): Query<PatientFilter>,
) -> Json<PatientList> {
    let cohort = &state.cohort;
    let patients = match filter.change {
        Some(change) => cohort
            .patients_with_primary_change(change)
            .into_iter()
            .cloned()
            .collect(),
        None => cohort.patients().to_vec(),
    };
    Json(PatientList {
        counts: cohort.primary_change_counts(),
        patients,
    })
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PatientDetail>, ApiError> {
    let patient = state.cohort.patient(id)?.clone();
    let profile = state.cohort.patient_profile(id)?;
    Ok(Json(PatientDetail { patient, profile }))
}
