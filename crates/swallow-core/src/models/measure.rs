use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::change::Change;
use crate::classify::classify_change;
use crate::normalize::severity;

/// Whether a measure is read off an imaging study or reported by the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    /// Scored from a videofluoroscopic swallow study (VFSS).
    Instrumental,
    /// Patient-reported outcome (PRO) questionnaire.
    PatientReported,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instrumental => "Instrumental (VFSS)",
            Self::PatientReported => "Patient-Reported (PRO)",
        }
    }
}

/// Which end of the native scale means harm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Polarity {
    HigherIsWorse,
    LowerIsWorse,
}

impl Polarity {
    /// True when `mcid` carries the sign this polarity expects.
    pub fn accepts_mcid(&self, mcid: f64) -> bool {
        match self {
            Self::HigherIsWorse => mcid > 0.0,
            Self::LowerIsWorse => mcid < 0.0,
        }
    }
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn integer(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2013}{}", self.min, self.max)
    }
}

/// Cohort summary statistics as reported by the study.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryStats {
    pub pre_mean: f64,
    pub post_mean: f64,
    pub pre_sd: f64,
    pub post_sd: f64,
}

/// One swallowing outcome instrument with its per-patient scores.
///
/// `pre` and `post` are index-aligned with the cohort's patients. `mcid` is
/// signed: positive for [`Polarity::HigherIsWorse`], negative for
/// [`Polarity::LowerIsWorse`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measure {
    pub key: String,
    pub label: String,
    pub full_name: String,
    pub category: Category,
    pub range: ScoreRange,
    pub polarity: Polarity,
    /// Human-readable direction note, e.g. "Higher = worse (≥3 abnormal)".
    pub direction: String,
    pub pre: Vec<f64>,
    pub post: Vec<f64>,
    pub stats: SummaryStats,
    /// Significance of the pre/post difference, kept verbatim ("<0.001").
    pub p_value: String,
    pub mcid: f64,
    pub description: String,
}

impl Measure {
    /// Nominal maximum of the instrument's scale.
    pub fn max_scale(&self) -> f64 {
        self.range.max
    }

    /// Scale as displayed, e.g. "0–28".
    pub fn scale(&self) -> String {
        self.range.to_string()
    }

    pub fn classify(&self, pre: f64, post: f64) -> Change {
        classify_change(self.polarity, self.mcid, pre, post)
    }

    pub fn normalize(&self, raw: f64) -> f64 {
        severity(self.polarity, self.max_scale(), raw)
    }

    /// Change label of every patient, in cohort order.
    pub fn changes(&self) -> impl Iterator<Item = Change> + '_ {
        self.pre
            .iter()
            .zip(&self.post)
            .map(|(&pre, &post)| self.classify(pre, post))
    }
}
