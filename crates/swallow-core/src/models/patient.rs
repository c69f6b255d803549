use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::change::Change;

/// A patient's raw scores and change label on one measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasureOutcome {
    pub key: String,
    pub pre: f64,
    pub post: f64,
    pub change: Change,
}

impl MeasureOutcome {
    pub fn diff(&self) -> f64 {
        self.post - self.pre
    }
}

/// One cohort member, derived entirely from the measures' score sequences at
/// the same index.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    /// 1-based; `patients()[id - 1]` is this patient.
    pub id: u32,
    pub label: String,
    /// One entry per measure, in dataset order.
    pub outcomes: Vec<MeasureOutcome>,
    /// Change label on the cohort's primary measure (DIGEST), used for
    /// filtering and coloring.
    pub primary_change: Change,
}

impl Patient {
    /// Display label for a patient id: `P01`, `P02`, ...
    pub fn label_for(id: u32) -> String {
        format!("P{id:02}")
    }

    pub fn outcome(&self, key: &str) -> Option<&MeasureOutcome> {
        self.outcomes.iter().find(|o| o.key == key)
    }
}

/// Normalized severity of one measure for one patient, 0–100 where 100 is
/// the worst possible score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityPoint {
    pub key: String,
    pub label: String,
    pub pre: f64,
    pub post: f64,
}
