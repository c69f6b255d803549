use axum::Json;
use serde::{Deserialize, Serialize};

use swallow_sim::{
    run_simulation, Interpretation, RiskMeter, SimulationInput, SimulationResult, DISCLAIMER,
};

#[derive(Deserialize)]
pub struct SimulateRequest {
    age: i64,
    levels: i64,
    pre_instrumental: i64,
    pre_pro: i64,
}

#[derive(Serialize)]
pub struct SimulateResponse {
    /// Parameters after clamping to their ranges.
    input: SimulationInput,
    pro_severity: &'static str,
    result: SimulationResult,
    overall_risk: f64,
    risk_meter: RiskMeter,
    interpretation: Interpretation,
    message: &'static str,
    disclaimer: &'static str,
}

pub async fn simulate(Json(req): Json<SimulateRequest>) -> Json<SimulateResponse> {
    let input = SimulationInput::clamped(req.age, req.levels, req.pre_instrumental, req.pre_pro);
    let result = run_simulation(&input);
    let interpretation = result.interpretation();
    tracing::debug!(
        seed = input.seed(),
        instrumental_risk = result.instrumental_risk,
        pro_risk = result.pro_risk,
        "simulation run"
    );

    Json(SimulateResponse {
        input,
        pro_severity: input.pro_severity_label(),
        overall_risk: result.overall_risk(),
        risk_meter: result.risk_meter(),
        interpretation,
        message: interpretation.message(),
        disclaimer: DISCLAIMER,
        result,
    })
}
