//! swallow-core
//!
//! Outcome derivation over the ACDF swallowing cohort. Pure data and
//! arithmetic, no I/O: measures and patients, severity normalization, change
//! classification against MCID thresholds, and measure-to-measure agreement.

pub mod agreement;
pub mod classify;
pub mod cohort;
pub mod dataset;
pub mod error;
pub mod models;
pub mod normalize;
pub mod summary;

pub use agreement::{AgreementLevel, AgreementMatrix, AgreementPair};
pub use cohort::Cohort;
pub use error::CohortError;
pub use models::{Category, Change, ChangeCounts, Measure, Patient, Polarity};
