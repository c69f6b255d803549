use swallow_core::dataset::MEASURE_KEYS;
use swallow_core::{AgreementLevel, AgreementMatrix, Cohort, CohortError};

fn cohort() -> Cohort {
    Cohort::reference().expect("reference cohort is valid")
}

#[test]
fn agreement_is_symmetric_with_full_diagonal() {
    let cohort = cohort();
    for a in MEASURE_KEYS {
        assert_eq!(cohort.agreement(a, a).unwrap(), 100.0);
        for b in MEASURE_KEYS {
            let ab = cohort.agreement(a, b).unwrap();
            assert_eq!(ab, cohort.agreement(b, a).unwrap(), "{a} vs {b}");
            assert!((0.0..=100.0).contains(&ab));
        }
    }
}

#[test]
fn authored_values_are_exposed() {
    let cohort = cohort();
    assert_eq!(cohort.agreement("digest", "mbsimp").unwrap(), 90.0);
    assert_eq!(cohort.agreement("eat10", "bazaz").unwrap(), 81.0);
    assert_eq!(cohort.agreement("swalqol", "mbsimp").unwrap(), 46.0);
}

#[test]
fn ranked_pairs_cover_every_unordered_pair() {
    let pairs = cohort().ranked_agreement_pairs();
    assert_eq!(pairs.len(), 15);
    assert!(pairs.iter().all(|p| p.a != p.b));
}

#[test]
fn ranked_pairs_are_non_increasing() {
    let pairs = cohort().ranked_agreement_pairs();
    for window in pairs.windows(2) {
        assert!(window[0].percent >= window[1].percent);
    }
}

#[test]
fn ties_are_broken_by_pair_label() {
    let labels: Vec<_> = cohort()
        .ranked_agreement_pairs()
        .into_iter()
        .map(|p| p.label)
        .collect();
    assert_eq!(
        labels,
        [
            "DIGEST \u{d7} MBSImP PTS",
            "EAT-10 \u{d7} Bazaz",
            "Bazaz \u{d7} HSS-DDI",
            "EAT-10 \u{d7} SWAL-QoL",
            "EAT-10 \u{d7} HSS-DDI",
            "SWAL-QoL \u{d7} Bazaz",
            "SWAL-QoL \u{d7} HSS-DDI",
            "DIGEST \u{d7} Bazaz",
            "MBSImP PTS \u{d7} Bazaz",
            "DIGEST \u{d7} EAT-10",
            "DIGEST \u{d7} HSS-DDI",
            "MBSImP PTS \u{d7} EAT-10",
            "MBSImP PTS \u{d7} HSS-DDI",
            "DIGEST \u{d7} SWAL-QoL",
            "MBSImP PTS \u{d7} SWAL-QoL",
        ]
    );
}

#[test]
fn pair_levels_follow_display_bands() {
    let pairs = cohort().ranked_agreement_pairs();
    assert_eq!(pairs[0].level, AgreementLevel::High);
    assert_eq!(AgreementLevel::of(75.0), AgreementLevel::High);
    assert_eq!(AgreementLevel::of(57.0), AgreementLevel::Moderate);
    assert_eq!(AgreementLevel::of(54.9), AgreementLevel::Low);
}

#[test]
fn derived_agreement_is_independent_of_authored_matrix() {
    let cohort = cohort();
    let derived = cohort.derived_agreement("digest", "eat10").unwrap();
    assert!((derived - 13.0 / 21.0 * 100.0).abs() < 1e-9);
    assert_eq!(cohort.agreement("digest", "eat10").unwrap(), 52.0);
}

#[test]
fn derived_agreement_of_a_measure_with_itself_is_total() {
    let cohort = cohort();
    for key in MEASURE_KEYS {
        assert_eq!(cohort.derived_agreement(key, key).unwrap(), 100.0);
    }
}

#[test]
fn asymmetric_matrix_is_rejected() {
    let err = AgreementMatrix::new(vec![vec![100.0, 40.0], vec![41.0, 100.0]]).unwrap_err();
    assert!(matches!(err, CohortError::InvalidAgreement(_)));
}

#[test]
fn diagonal_must_be_one_hundred() {
    assert!(AgreementMatrix::new(vec![vec![99.0, 40.0], vec![40.0, 100.0]]).is_err());
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(AgreementMatrix::new(vec![vec![100.0, 140.0], vec![140.0, 100.0]]).is_err());
}

#[test]
fn ragged_matrix_is_rejected() {
    assert!(AgreementMatrix::new(vec![vec![100.0], vec![40.0, 100.0]]).is_err());
}

#[test]
fn deserializing_validates_the_matrix() {
    let asymmetric = r#"{"rows":[[100.0,40.0],[41.0,100.0]]}"#;
    assert!(serde_json::from_str::<AgreementMatrix>(asymmetric).is_err());

    let matrix = cohort().agreement_matrix().clone();
    let json = serde_json::to_string(&matrix).unwrap();
    let parsed: AgreementMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, matrix);
}
