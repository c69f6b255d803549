use swallow_core::classify::classify_change;
use swallow_core::models::Change;
use swallow_core::{Cohort, CohortError, Polarity};

fn cohort() -> Cohort {
    Cohort::reference().expect("reference cohort is valid")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn bazaz_two_is_two_thirds_severe() {
    let severity = cohort().normalize("bazaz", 2.0).unwrap();
    assert!(approx(severity, 2.0 / 3.0 * 100.0));
    assert_eq!(format!("{severity:.1}"), "66.7");
}

#[test]
fn swalqol_is_inverted() {
    let cohort = cohort();
    assert!(approx(cohort.normalize("swalqol", 100.0).unwrap(), 0.0));
    assert!(approx(cohort.normalize("swalqol", 0.0).unwrap(), 100.0));
    assert!(approx(cohort.normalize("swalqol", 76.0).unwrap(), 24.0));
}

#[test]
fn scale_extremes_map_to_zero_and_hundred() {
    let cohort = cohort();
    for measure in cohort.measures() {
        let (best, worst) = match measure.polarity {
            Polarity::HigherIsWorse => (measure.range.min, measure.range.max),
            Polarity::LowerIsWorse => (measure.range.max, measure.range.min),
        };
        assert!(approx(measure.normalize(best), 0.0), "{}", measure.key);
        assert!(approx(measure.normalize(worst), 100.0), "{}", measure.key);
    }
}

#[test]
fn normalize_is_monotonic_in_severity() {
    for measure in cohort().measures() {
        let mut raw = measure.range.min;
        let mut previous: Option<f64> = None;
        while raw <= measure.range.max {
            let severity = measure.normalize(raw);
            if let Some(prev) = previous {
                match measure.polarity {
                    Polarity::HigherIsWorse => assert!(severity >= prev, "{}", measure.key),
                    Polarity::LowerIsWorse => assert!(severity <= prev, "{}", measure.key),
                }
            }
            previous = Some(severity);
            raw += 1.0;
        }
    }
}

#[test]
fn normalize_does_not_clamp_out_of_range_scores() {
    let severity = cohort().normalize("digest", 8.0).unwrap();
    assert!(approx(severity, 200.0));
}

#[test]
fn normalize_checked_rejects_out_of_range_scores() {
    let cohort = cohort();
    assert!(matches!(
        cohort.normalize_checked("digest", 5.0),
        Err(CohortError::ScoreOutOfRange { ref key, .. }) if key == "digest"
    ));
    assert!(cohort.normalize_checked("eat10", -1.0).is_err());
    assert!(cohort.normalize_checked("eat10", 2.5).is_err());
    assert!(approx(cohort.normalize_checked("eat10", 10.0).unwrap(), 25.0));
}

#[test]
fn classify_change_checked_rejects_scores_off_the_scale() {
    let cohort = cohort();
    assert!(matches!(
        cohort.classify_change_checked("digest", 0.0, 500.0),
        Err(CohortError::ScoreOutOfRange { ref key, value, .. }) if key == "digest" && value == 500.0
    ));
    assert!(cohort.classify_change_checked("digest", f64::NAN, 1.0).is_err());
    assert!(cohort.classify_change_checked("swalqol", f64::INFINITY, 0.0).is_err());
    assert!(cohort.classify_change_checked("fois", 1.0, 2.0).is_err());
    assert_eq!(
        cohort.classify_change_checked("swalqol", 76.0, 58.0).unwrap(),
        Change::Worse
    );
}

#[test]
fn digest_rise_of_one_is_worse() {
    assert_eq!(cohort().classify_change("digest", 1.0, 2.0).unwrap(), Change::Worse);
}

#[test]
fn swalqol_drop_beyond_mcid_is_worse() {
    assert_eq!(cohort().classify_change("swalqol", 76.0, 58.0).unwrap(), Change::Worse);
}

#[test]
fn swalqol_boundaries() {
    let cohort = cohort();
    assert_eq!(cohort.classify_change("swalqol", 90.0, 76.0).unwrap(), Change::Worse);
    assert_eq!(cohort.classify_change("swalqol", 90.0, 77.0).unwrap(), Change::Stable);
    assert_eq!(cohort.classify_change("swalqol", 70.0, 84.0).unwrap(), Change::Improved);
    assert_eq!(cohort.classify_change("swalqol", 70.0, 83.0).unwrap(), Change::Stable);
}

#[test]
fn hssddi_boundaries() {
    let cohort = cohort();
    assert_eq!(cohort.classify_change("hssddi", 2.0, 14.0).unwrap(), Change::Worse);
    assert_eq!(cohort.classify_change("hssddi", 2.0, 13.0).unwrap(), Change::Stable);
    assert_eq!(cohort.classify_change("hssddi", 20.0, 8.0).unwrap(), Change::Improved);
}

#[test]
fn zero_difference_is_stable_for_every_measure() {
    for measure in cohort().measures() {
        let mut raw = measure.range.min;
        while raw <= measure.range.max {
            assert_eq!(measure.classify(raw, raw), Change::Stable, "{} at {raw}", measure.key);
            raw += 1.0;
        }
    }
}

#[test]
fn swapping_pre_and_post_reverses_clinically_important_changes() {
    for measure in cohort().measures() {
        let threshold = measure.mcid.abs();
        for offset in [threshold, threshold + 1.0, threshold + 5.0] {
            let pre = measure.range.min;
            let post = pre + offset;
            if post > measure.range.max {
                continue;
            }
            let forward = measure.classify(pre, post);
            let backward = measure.classify(post, pre);
            assert_ne!(forward, Change::Stable, "{}", measure.key);
            assert_eq!(backward, forward.reversed(), "{}", measure.key);
        }
    }
}

#[test]
fn small_changes_are_stable_both_ways() {
    let change = classify_change(Polarity::HigherIsWorse, 12.0, 10.0, 21.0);
    assert_eq!(change, Change::Stable);
    assert_eq!(classify_change(Polarity::HigherIsWorse, 12.0, 21.0, 10.0), Change::Stable);
    assert_eq!(classify_change(Polarity::LowerIsWorse, -14.0, 90.0, 80.0), Change::Stable);
    assert_eq!(classify_change(Polarity::LowerIsWorse, -14.0, 80.0, 90.0), Change::Stable);
}
