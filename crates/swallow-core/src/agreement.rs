//! Pairwise concordance between measures.
//!
//! The authored matrix carries the study's reported concordance and is what
//! gets displayed. [`Cohort::derived_agreement`] recomputes agreement from
//! the per-patient change labels as a cross-check only; the two are not
//! expected to match.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cohort::Cohort;
use crate::error::CohortError;

const DIAGONAL: f64 = 100.0;

/// Symmetric concordance percentages, indexed in dataset measure order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(try_from = "RawMatrix")]
#[ts(export)]
pub struct AgreementMatrix {
    rows: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawMatrix {
    rows: Vec<Vec<f64>>,
}

impl TryFrom<RawMatrix> for AgreementMatrix {
    type Error = CohortError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        Self::new(raw.rows)
    }
}

impl AgreementMatrix {
    /// Validate a square matrix: symmetric, diagonal 100, every value in
    /// [0, 100].
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, CohortError> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(CohortError::InvalidAgreement(format!(
                    "row {i} has {} values, expected {n}",
                    row.len()
                )));
            }
            if row[i] != DIAGONAL {
                return Err(CohortError::InvalidAgreement(format!(
                    "diagonal entry {i} is {}, expected {DIAGONAL}",
                    row[i]
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !(0.0..=100.0).contains(&value) {
                    return Err(CohortError::InvalidAgreement(format!(
                        "entry ({i}, {j}) = {value} is outside [0, 100]"
                    )));
                }
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(CohortError::InvalidAgreement(format!(
                        "entry ({i}, {j}) = {} but ({j}, {i}) = {}",
                        rows[i][j], rows[j][i]
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Display band for a concordance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgreementLevel {
    High,
    Moderate,
    Low,
}

impl AgreementLevel {
    pub fn of(percent: f64) -> Self {
        if percent >= 75.0 {
            Self::High
        } else if percent >= 55.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// An unordered pair of distinct measures with their authored agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgreementPair {
    pub a: String,
    pub b: String,
    /// "DIGEST × EAT-10"
    pub label: String,
    pub percent: f64,
    pub level: AgreementLevel,
}

impl Cohort {
    /// Authored concordance between two measures.
    pub fn agreement(&self, a: &str, b: &str) -> Result<f64, CohortError> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.agreement_matrix().get(i, j))
    }

    /// Every `(i, j)` pair with `i < j`, highest agreement first. Equal
    /// percentages are ordered by pair label.
    pub fn ranked_agreement_pairs(&self) -> Vec<AgreementPair> {
        let measures = self.measures();
        let matrix = self.agreement_matrix();
        let mut pairs = Vec::with_capacity(measures.len() * measures.len().saturating_sub(1) / 2);
        for (i, a) in measures.iter().enumerate() {
            for (j, b) in measures.iter().enumerate().skip(i + 1) {
                let percent = matrix.get(i, j);
                pairs.push(AgreementPair {
                    a: a.key.clone(),
                    b: b.key.clone(),
                    label: format!("{} \u{d7} {}", a.label, b.label),
                    percent,
                    level: AgreementLevel::of(percent),
                });
            }
        }
        pairs.sort_by(|x, y| {
            y.percent
                .total_cmp(&x.percent)
                .then_with(|| x.label.cmp(&y.label))
        });
        pairs
    }

    /// Share of patients whose change labels on `a` and `b` coincide, as a
    /// percentage. Validation utility; display uses [`Cohort::agreement`].
    pub fn derived_agreement(&self, a: &str, b: &str) -> Result<f64, CohortError> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        let matching = self
            .patients()
            .iter()
            .filter(|p| p.outcomes[i].change == p.outcomes[j].change)
            .count();
        Ok(matching as f64 / self.size() as f64 * 100.0)
    }
}
