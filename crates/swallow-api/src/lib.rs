//! swallow-api
//!
//! JSON query service over the ACDF swallowing cohort. Every route is a
//! read-only view of the engine; nothing is stored between requests.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Measures
        .route("/measures", get(routes::measures::list_measures))
        .route("/measures/{key}", get(routes::measures::get_measure))
        .route(
            "/measures/{key}/normalize",
            get(routes::measures::normalize),
        )
        .route("/measures/{key}/classify", get(routes::measures::classify))
        .route(
            "/measures/{key}/summary",
            get(routes::measures::outcome_summary),
        )
        // Patients
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients/{id}", get(routes::patients::get_patient))
        // Agreement
        .route("/agreement", get(routes::agreement::get_matrix))
        .route("/agreement/pairs", get(routes::agreement::ranked_pairs))
        .route("/agreement/{a}/{b}", get(routes::agreement::get_pair))
        // Simulator
        .route("/simulate", post(routes::simulate::simulate))
        // Calculators
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/score",
            post(routes::instruments::score_instrument),
        )
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
