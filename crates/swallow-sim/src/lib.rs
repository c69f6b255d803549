//! swallow-sim
//!
//! Deterministic toy model of post-ACDF swallowing risk. Seeded from the
//! patient parameters, so identical inputs always give identical output.
//! Illustrative only: the numbers are not a clinical prediction.

pub mod error;
pub mod input;
pub mod model;
pub mod rng;

pub use error::SimulationError;
pub use input::SimulationInput;
pub use model::{
    run_simulation, Interpretation, MeasureRisk, RiskBand, RiskMeter, SimulationResult, DISCLAIMER,
};
pub use rng::SeededRng;
