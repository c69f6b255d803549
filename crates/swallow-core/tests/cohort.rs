use swallow_core::dataset::{self, COHORT_SIZE, MEASURE_KEYS};
use swallow_core::models::Change;
use swallow_core::{Cohort, CohortError, Polarity};

fn cohort() -> Cohort {
    Cohort::reference().expect("reference cohort is valid")
}

#[test]
fn every_measure_has_a_full_cohort_of_scores() {
    let cohort = cohort();
    assert_eq!(cohort.size(), COHORT_SIZE);
    for measure in cohort.measures() {
        assert_eq!(measure.pre.len(), 21, "{}", measure.key);
        assert_eq!(measure.post.len(), 21, "{}", measure.key);
    }
}

#[test]
fn measures_follow_dataset_order() {
    let keys: Vec<_> = cohort().measures().iter().map(|m| m.key.clone()).collect();
    assert_eq!(keys, MEASURE_KEYS);
}

#[test]
fn polarity_agrees_with_mcid_sign() {
    for measure in cohort().measures() {
        match measure.polarity {
            Polarity::HigherIsWorse => assert!(measure.mcid > 0.0, "{}", measure.key),
            Polarity::LowerIsWorse => assert!(measure.mcid < 0.0, "{}", measure.key),
        }
    }
}

#[test]
fn max_scale_matches_scale_upper_bound() {
    let cohort = cohort();
    let expected = [
        ("digest", 4.0),
        ("mbsimp", 28.0),
        ("eat10", 40.0),
        ("swalqol", 100.0),
        ("bazaz", 3.0),
        ("hssddi", 100.0),
    ];
    for (key, max) in expected {
        assert_eq!(cohort.max_scale(key).unwrap(), max);
        assert_eq!(cohort.measure(key).unwrap().scale(), format!("0\u{2013}{max}"));
    }
}

#[test]
fn unknown_measure_is_a_lookup_error() {
    let cohort = cohort();
    assert!(matches!(
        cohort.measure("fois"),
        Err(CohortError::UnknownMeasure(key)) if key == "fois"
    ));
    assert!(cohort.normalize("fois", 1.0).is_err());
    assert!(cohort.classify_change("fois", 1.0, 2.0).is_err());
    assert!(cohort.agreement("digest", "fois").is_err());
}

#[test]
fn patients_are_index_aligned_with_measures() {
    let cohort = cohort();
    for (index, patient) in cohort.patients().iter().enumerate() {
        assert_eq!(patient.id as usize, index + 1);
        for (measure, outcome) in cohort.measures().iter().zip(&patient.outcomes) {
            assert_eq!(outcome.key, measure.key);
            assert_eq!(outcome.pre, measure.pre[index]);
            assert_eq!(outcome.post, measure.post[index]);
            assert_eq!(outcome.change, measure.classify(outcome.pre, outcome.post));
        }
    }
}

#[test]
fn patient_labels_are_zero_padded() {
    let cohort = cohort();
    assert_eq!(cohort.patients()[0].label, "P01");
    assert_eq!(cohort.patients()[20].label, "P21");
}

#[test]
fn patient_twenty_worsened_on_digest() {
    let cohort = cohort();
    let patient = cohort.patient(20).unwrap();
    let digest = patient.outcome("digest").unwrap();
    assert_eq!((digest.pre, digest.post), (1.0, 2.0));
    assert_eq!(digest.change, Change::Worse);
    assert_eq!(patient.primary_change, Change::Worse);
}

#[test]
fn primary_change_follows_digest() {
    let cohort = cohort();
    assert_eq!(cohort.primary_measure().key, "digest");
    for patient in cohort.patients() {
        assert_eq!(patient.primary_change, patient.outcomes[0].change);
    }
}

#[test]
fn patient_lookup_rejects_out_of_range_ids() {
    let cohort = cohort();
    assert!(matches!(cohort.patient(0), Err(CohortError::UnknownPatient(0))));
    assert!(matches!(cohort.patient(22), Err(CohortError::UnknownPatient(22))));
}

#[test]
fn mismatched_score_lengths_are_rejected() {
    let mut measures = dataset::measures();
    measures[2].post.pop();
    let err = Cohort::new(measures, dataset::agreement().unwrap(), "digest").unwrap_err();
    assert!(matches!(
        err,
        CohortError::CohortSizeMismatch { ref key, phase: "post", expected: 21, found: 20 } if key == "eat10"
    ));
}

#[test]
fn mcid_sign_must_match_polarity() {
    let mut measures = dataset::measures();
    measures[3].mcid = 14.0;
    let err = Cohort::new(measures, dataset::agreement().unwrap(), "digest").unwrap_err();
    assert!(matches!(err, CohortError::PolarityMismatch { ref key, .. } if key == "swalqol"));
}

#[test]
fn inverted_measures_must_use_a_percent_scale() {
    let mut measures = dataset::measures();
    measures[3].range.max = 120.0;
    let err = Cohort::new(measures, dataset::agreement().unwrap(), "digest").unwrap_err();
    assert!(matches!(err, CohortError::InvertedScale { .. }));
}

#[test]
fn scores_outside_the_scale_are_rejected() {
    let mut measures = dataset::measures();
    measures[4].post[0] = 4.0;
    let err = Cohort::new(measures, dataset::agreement().unwrap(), "digest").unwrap_err();
    assert!(matches!(err, CohortError::ScoreOutOfRange { ref key, .. } if key == "bazaz"));
}

#[test]
fn duplicate_keys_are_rejected() {
    let mut measures = dataset::measures();
    measures[1].key = "digest".to_string();
    let err = Cohort::new(measures, dataset::agreement().unwrap(), "digest").unwrap_err();
    assert!(matches!(err, CohortError::DuplicateMeasure(key) if key == "digest"));
}

#[test]
fn primary_measure_must_exist() {
    let err = Cohort::new(dataset::measures(), dataset::agreement().unwrap(), "fees").unwrap_err();
    assert!(matches!(err, CohortError::UnknownMeasure(key) if key == "fees"));
}

#[test]
fn agreement_dimension_must_match_measures() {
    let mut measures = dataset::measures();
    measures.pop();
    let err = Cohort::new(measures, dataset::agreement().unwrap(), "digest").unwrap_err();
    assert!(matches!(err, CohortError::InvalidAgreement(_)));
}

#[test]
fn measures_serialize_with_snake_case_enums() {
    let cohort = cohort();
    let json = serde_json::to_value(cohort.measure("swalqol").unwrap()).unwrap();
    assert_eq!(json["polarity"], "lower_is_worse");
    assert_eq!(json["category"], "patient_reported");
    assert_eq!(json["mcid"], -14.0);
}

#[test]
fn cohort_without_patients_is_rejected() {
    let mut measures = dataset::measures();
    for measure in &mut measures {
        measure.pre.clear();
        measure.post.clear();
    }
    let err = Cohort::new(measures, dataset::agreement().unwrap(), "digest").unwrap_err();
    assert!(matches!(err, CohortError::Empty));
}

#[test]
fn cohort_without_measures_is_rejected() {
    let agreement = swallow_core::AgreementMatrix::new(Vec::new()).unwrap();
    let err = Cohort::new(Vec::new(), agreement, "digest").unwrap_err();
    assert!(matches!(err, CohortError::Empty));
}
