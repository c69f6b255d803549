use std::collections::HashSet;

use crate::agreement::AgreementMatrix;
use crate::dataset;
use crate::error::CohortError;
use crate::models::{Change, Measure, MeasureOutcome, Patient, Polarity};
use crate::normalize::INVERTED_SCALE_MAX;

/// The study cohort: measures, the patients derived from them, and the
/// authored agreement matrix.
///
/// Built once and read-only afterward. Share it behind an `Arc` rather than
/// rebuilding it per query.
#[derive(Debug, Clone)]
pub struct Cohort {
    measures: Vec<Measure>,
    patients: Vec<Patient>,
    agreement: AgreementMatrix,
    primary: usize,
}

impl Cohort {
    /// Validate the measures and agreement matrix and derive patient records.
    ///
    /// `primary` names the measure whose change label becomes each patient's
    /// `primary_change`.
    pub fn new(
        measures: Vec<Measure>,
        agreement: AgreementMatrix,
        primary: &str,
    ) -> Result<Self, CohortError> {
        let size = measures.first().ok_or(CohortError::Empty)?.pre.len();
        if size == 0 {
            return Err(CohortError::Empty);
        }

        let mut seen = HashSet::new();
        for measure in &measures {
            if !seen.insert(measure.key.as_str()) {
                return Err(CohortError::DuplicateMeasure(measure.key.clone()));
            }
            validate_measure(measure, size)?;
        }

        if agreement.dimension() != measures.len() {
            return Err(CohortError::InvalidAgreement(format!(
                "matrix is {0}x{0} but cohort has {1} measures",
                agreement.dimension(),
                measures.len()
            )));
        }

        let primary = measures
            .iter()
            .position(|m| m.key == primary)
            .ok_or_else(|| CohortError::UnknownMeasure(primary.to_string()))?;

        let patients = (0..size)
            .map(|i| build_patient(&measures, primary, i))
            .collect();

        Ok(Self {
            measures,
            patients,
            agreement,
            primary,
        })
    }

    /// The published 21-patient ACDF cohort.
    pub fn reference() -> Result<Self, CohortError> {
        Self::new(
            dataset::measures(),
            dataset::agreement()?,
            dataset::PRIMARY_MEASURE,
        )
    }

    /// Number of patients.
    pub fn size(&self) -> usize {
        self.patients.len()
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    pub fn measure(&self, key: &str) -> Result<&Measure, CohortError> {
        Ok(&self.measures[self.index_of(key)?])
    }

    pub fn primary_measure(&self) -> &Measure {
        &self.measures[self.primary]
    }

    pub fn max_scale(&self, key: &str) -> Result<f64, CohortError> {
        Ok(self.measure(key)?.max_scale())
    }

    /// Normalized severity of `raw` on `key`, without range checking.
    pub fn normalize(&self, key: &str, raw: f64) -> Result<f64, CohortError> {
        Ok(self.measure(key)?.normalize(raw))
    }

    /// Normalized severity of `raw` on `key`, rejecting scores outside the
    /// instrument's scale.
    pub fn normalize_checked(&self, key: &str, raw: f64) -> Result<f64, CohortError> {
        let measure = self.measure(key)?;
        check_range(measure, raw)?;
        Ok(measure.normalize(raw))
    }

    pub fn classify_change(&self, key: &str, pre: f64, post: f64) -> Result<Change, CohortError> {
        Ok(self.measure(key)?.classify(pre, post))
    }

    /// Change label for `pre` to `post` on `key`, rejecting either score if
    /// it falls outside the instrument's scale.
    pub fn classify_change_checked(
        &self,
        key: &str,
        pre: f64,
        post: f64,
    ) -> Result<Change, CohortError> {
        let measure = self.measure(key)?;
        check_range(measure, pre)?;
        check_range(measure, post)?;
        Ok(measure.classify(pre, post))
    }

    /// Patients in id order; `patients()[id - 1]` has the given id.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn patient(&self, id: u32) -> Result<&Patient, CohortError> {
        id.checked_sub(1)
            .and_then(|i| self.patients.get(i as usize))
            .ok_or(CohortError::UnknownPatient(id))
    }

    pub fn agreement_matrix(&self) -> &AgreementMatrix {
        &self.agreement
    }

    pub(crate) fn index_of(&self, key: &str) -> Result<usize, CohortError> {
        self.measures
            .iter()
            .position(|m| m.key == key)
            .ok_or_else(|| CohortError::UnknownMeasure(key.to_string()))
    }
}

fn validate_measure(measure: &Measure, size: usize) -> Result<(), CohortError> {
    for (phase, scores) in [("pre", &measure.pre), ("post", &measure.post)] {
        if scores.len() != size {
            return Err(CohortError::CohortSizeMismatch {
                key: measure.key.clone(),
                phase,
                expected: size,
                found: scores.len(),
            });
        }
        for &score in scores {
            check_range(measure, score)?;
        }
    }

    if !measure.polarity.accepts_mcid(measure.mcid) {
        return Err(CohortError::PolarityMismatch {
            key: measure.key.clone(),
            mcid: measure.mcid,
            polarity: measure.polarity,
        });
    }

    if measure.polarity == Polarity::LowerIsWorse
        && (measure.range.min != 0.0 || measure.range.max != INVERTED_SCALE_MAX)
    {
        return Err(CohortError::InvertedScale {
            key: measure.key.clone(),
            min: measure.range.min,
            max: measure.range.max,
        });
    }

    Ok(())
}

fn check_range(measure: &Measure, value: f64) -> Result<(), CohortError> {
    if measure.range.contains(value) {
        Ok(())
    } else {
        Err(CohortError::ScoreOutOfRange {
            key: measure.key.clone(),
            value,
            min: measure.range.min,
            max: measure.range.max,
        })
    }
}

fn build_patient(measures: &[Measure], primary: usize, index: usize) -> Patient {
    let outcomes: Vec<MeasureOutcome> = measures
        .iter()
        .map(|m| {
            let (pre, post) = (m.pre[index], m.post[index]);
            MeasureOutcome {
                key: m.key.clone(),
                pre,
                post,
                change: m.classify(pre, post),
            }
        })
        .collect();

    let id = index as u32 + 1;
    Patient {
        id,
        label: Patient::label_for(id),
        primary_change: outcomes[primary].change,
        outcomes,
    }
}
