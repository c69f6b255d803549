use thiserror::Error;

use crate::models::Polarity;

#[derive(Debug, Error)]
pub enum CohortError {
    #[error("unknown measure: {0}")]
    UnknownMeasure(String),

    #[error("unknown patient: {0}")]
    UnknownPatient(u32),

    #[error("{key}: score {value} is outside range [{min}, {max}]")]
    ScoreOutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("duplicate measure key: {0}")]
    DuplicateMeasure(String),

    #[error("cohort has no measures or no patients")]
    Empty,

    #[error("{key}: expected {expected} {phase} scores, found {found}")]
    CohortSizeMismatch {
        key: String,
        phase: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{key}: mcid {mcid} is inconsistent with {polarity:?}")]
    PolarityMismatch {
        key: String,
        mcid: f64,
        polarity: Polarity,
    },

    #[error("{key}: lower-is-worse measures must be scored 0\u{2013}100, found [{min}, {max}]")]
    InvertedScale { key: String, min: f64, max: f64 },

    #[error("invalid agreement matrix: {0}")]
    InvalidAgreement(String),
}
