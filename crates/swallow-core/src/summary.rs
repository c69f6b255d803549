//! Cohort-level views over the derived patient records.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cohort::Cohort;
use crate::error::CohortError;
use crate::models::{Change, ChangeCounts, Patient, Polarity, SeverityPoint};

/// Normalized severity of the authored pre/post means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityProfile {
    pub pre: f64,
    pub post: f64,
}

impl Cohort {
    pub fn change_counts(&self, key: &str) -> Result<ChangeCounts, CohortError> {
        let i = self.index_of(key)?;
        Ok(ChangeCounts::tally(
            self.patients().iter().map(|p| p.outcomes[i].change),
        ))
    }

    /// Percentage of the cohort classified as worse on `key`.
    pub fn worsening_rate(&self, key: &str) -> Result<f64, CohortError> {
        let counts = self.change_counts(key)?;
        Ok(counts.worse as f64 / self.size() as f64 * 100.0)
    }

    pub fn normalized_means(&self, key: &str) -> Result<SeverityProfile, CohortError> {
        let measure = self.measure(key)?;
        Ok(SeverityProfile {
            pre: measure.normalize(measure.stats.pre_mean),
            post: measure.normalize(measure.stats.post_mean),
        })
    }

    /// Mean shift toward harm in native units: positive means the cohort got
    /// worse on average.
    pub fn mean_worsening(&self, key: &str) -> Result<f64, CohortError> {
        let measure = self.measure(key)?;
        let stats = measure.stats;
        Ok(match measure.polarity {
            Polarity::HigherIsWorse => stats.post_mean - stats.pre_mean,
            Polarity::LowerIsWorse => stats.pre_mean - stats.post_mean,
        })
    }

    /// Patient counts by change on the primary measure.
    pub fn primary_change_counts(&self) -> ChangeCounts {
        ChangeCounts::tally(self.patients().iter().map(|p| p.primary_change))
    }

    pub fn patients_with_primary_change(&self, change: Change) -> Vec<&Patient> {
        self.patients()
            .iter()
            .filter(|p| p.primary_change == change)
            .collect()
    }

    /// Ids of patients whose post-op score on `key` is at or above `score`.
    /// A zero score matches nobody.
    pub fn patients_at_or_above(&self, key: &str, score: f64) -> Result<Vec<u32>, CohortError> {
        let i = self.index_of(key)?;
        if score <= 0.0 {
            return Ok(Vec::new());
        }
        Ok(self
            .patients()
            .iter()
            .filter(|p| p.outcomes[i].post >= score)
            .map(|p| p.id)
            .collect())
    }

    /// Normalized pre/post severity of every measure for one patient.
    pub fn patient_profile(&self, id: u32) -> Result<Vec<SeverityPoint>, CohortError> {
        let patient = self.patient(id)?;
        Ok(self
            .measures()
            .iter()
            .zip(&patient.outcomes)
            .map(|(measure, outcome)| SeverityPoint {
                key: measure.key.clone(),
                label: measure.label.clone(),
                pre: measure.normalize(outcome.pre),
                post: measure.normalize(outcome.post),
            })
            .collect())
    }
}
