//! Reference data from the ACDF swallowing-outcome study: 21 patients, six
//! measures, scored before and after surgery.

use crate::agreement::AgreementMatrix;
use crate::error::CohortError;
use crate::models::{Category, Measure, Polarity, ScoreRange, SummaryStats};

/// Patients in the study.
pub const COHORT_SIZE: usize = 21;

/// Measure whose change label drives cohort filtering.
pub const PRIMARY_MEASURE: &str = "digest";

/// Measure keys in dataset order. Agreement matrix rows follow this order.
pub const MEASURE_KEYS: [&str; 6] = ["digest", "mbsimp", "eat10", "swalqol", "bazaz", "hssddi"];

const AGREEMENT: [[f64; 6]; 6] = [
    [100.0, 90.0, 52.0, 48.0, 57.0, 52.0],
    [90.0, 100.0, 50.0, 46.0, 54.0, 50.0],
    [52.0, 50.0, 100.0, 76.0, 81.0, 71.0],
    [48.0, 46.0, 76.0, 100.0, 71.0, 67.0],
    [57.0, 54.0, 81.0, 71.0, 100.0, 76.0],
    [52.0, 50.0, 71.0, 67.0, 76.0, 100.0],
];

/// Concordance reported by the study's statistical analysis.
pub fn agreement() -> Result<AgreementMatrix, CohortError> {
    AgreementMatrix::new(AGREEMENT.iter().map(|row| row.to_vec()).collect())
}

pub fn measures() -> Vec<Measure> {
    vec![
        Measure {
            key: "digest".to_string(),
            label: "DIGEST".to_string(),
            full_name: "Dynamic Imaging Grade of Swallowing Toxicity".to_string(),
            category: Category::Instrumental,
            range: ScoreRange::integer(0.0, 4.0),
            polarity: Polarity::HigherIsWorse,
            direction: "Higher = worse".to_string(),
            pre: scores(&[0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0]),
            post: scores(&[1, 0, 1, 1, 0, 1, 2, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 2, 0]),
            stats: SummaryStats {
                pre_mean: 0.24,
                post_mean: 0.57,
                pre_sd: 0.44,
                post_sd: 0.60,
            },
            p_value: "0.012".to_string(),
            mcid: 1.0,
            description: "DIGEST grades overall swallowing safety and efficiency from \
                videofluoroscopy. Scores shifted toward mild-to-moderate impairment post-ACDF."
                .to_string(),
        },
        Measure {
            key: "mbsimp".to_string(),
            label: "MBSImP PTS".to_string(),
            full_name: "MBSImP Pharyngeal Total Score".to_string(),
            category: Category::Instrumental,
            range: ScoreRange::integer(0.0, 28.0),
            polarity: Polarity::HigherIsWorse,
            direction: "Higher = worse".to_string(),
            pre: scores(&[2, 3, 1, 5, 2, 3, 4, 1, 2, 3, 6, 2, 1, 3, 5, 2, 4, 1, 3, 7, 2]),
            post: scores(&[4, 5, 3, 8, 3, 5, 7, 2, 4, 4, 8, 4, 3, 4, 7, 3, 6, 3, 5, 10, 3]),
            stats: SummaryStats {
                pre_mean: 3.0,
                post_mean: 5.0,
                pre_sd: 1.6,
                post_sd: 2.1,
            },
            p_value: "0.003".to_string(),
            mcid: 3.0,
            description: "Quantifies pharyngeal swallowing impairment severity across \
                multiple physiological components."
                .to_string(),
        },
        Measure {
            key: "eat10".to_string(),
            label: "EAT-10".to_string(),
            full_name: "Eating Assessment Tool".to_string(),
            category: Category::PatientReported,
            range: ScoreRange::integer(0.0, 40.0),
            polarity: Polarity::HigherIsWorse,
            direction: "Higher = worse (\u{2265}3 abnormal)".to_string(),
            pre: scores(&[0, 2, 0, 3, 1, 0, 5, 0, 1, 0, 4, 0, 1, 2, 3, 0, 1, 0, 2, 6, 0]),
            post: scores(&[4, 8, 2, 10, 3, 5, 12, 1, 6, 3, 9, 4, 2, 5, 8, 3, 7, 2, 5, 14, 1]),
            stats: SummaryStats {
                pre_mean: 1.5,
                post_mean: 5.4,
                pre_sd: 1.8,
                post_sd: 3.6,
            },
            p_value: "<0.001".to_string(),
            mcid: 3.0,
            description: "Self-administered symptom severity tool. Many patients crossed the \
                \u{2265}3 clinical threshold post-ACDF."
                .to_string(),
        },
        Measure {
            key: "swalqol".to_string(),
            label: "SWAL-QoL".to_string(),
            full_name: "Swallowing Quality of Life Questionnaire".to_string(),
            category: Category::PatientReported,
            range: ScoreRange::integer(0.0, 100.0),
            polarity: Polarity::LowerIsWorse,
            direction: "Lower = worse".to_string(),
            pre: scores(&[
                98, 92, 100, 85, 95, 97, 80, 100, 96, 98, 82, 97, 99, 93, 86, 100, 95, 100, 94, 76,
                100,
            ]),
            post: scores(&[
                82, 78, 92, 68, 86, 80, 62, 95, 76, 90, 70, 82, 92, 80, 72, 88, 78, 94, 82, 58, 92,
            ]),
            stats: SummaryStats {
                pre_mean: 93.5,
                post_mean: 80.4,
                pre_sd: 7.3,
                post_sd: 9.8,
            },
            p_value: "<0.001".to_string(),
            mcid: -14.0,
            description: "Captures swallowing-related quality of life across multiple domains. \
                Broad decline indicates substantial QoL impact."
                .to_string(),
        },
        Measure {
            key: "bazaz".to_string(),
            label: "Bazaz".to_string(),
            full_name: "Bazaz Dysphagia Scale".to_string(),
            category: Category::PatientReported,
            range: ScoreRange::integer(0.0, 3.0),
            polarity: Polarity::HigherIsWorse,
            direction: "Higher = worse".to_string(),
            pre: scores(&[0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 2, 0]),
            post: scores(&[1, 1, 0, 2, 1, 1, 2, 0, 1, 0, 2, 1, 0, 1, 2, 0, 1, 0, 1, 3, 0]),
            stats: SummaryStats {
                pre_mean: 0.29,
                post_mean: 0.95,
                pre_sd: 0.56,
                post_sd: 0.80,
            },
            p_value: "0.002".to_string(),
            mcid: 1.0,
            description: "Widely used in spine surgery to grade dysphagia severity. Confirms \
                common new/worsening difficulty."
                .to_string(),
        },
        Measure {
            key: "hssddi".to_string(),
            label: "HSS-DDI".to_string(),
            full_name: "Hospital for Special Surgery Dysphagia & Dysphonia Index".to_string(),
            category: Category::PatientReported,
            range: ScoreRange::integer(0.0, 100.0),
            polarity: Polarity::HigherIsWorse,
            direction: "Higher = worse".to_string(),
            pre: scores(&[2, 5, 0, 12, 3, 2, 15, 0, 4, 1, 10, 3, 1, 4, 11, 2, 5, 0, 3, 18, 1]),
            post: scores(&[
                14, 20, 5, 28, 12, 16, 32, 3, 18, 8, 24, 15, 6, 14, 22, 8, 18, 5, 14, 38, 4,
            ]),
            stats: SummaryStats {
                pre_mean: 4.9,
                post_mean: 15.4,
                pre_sd: 5.1,
                post_sd: 9.3,
            },
            p_value: "<0.001".to_string(),
            mcid: 12.0,
            description: "Developed specifically for cervical spine surgery. Reflects \
                multifaceted impact on swallowing and voice."
                .to_string(),
        },
    ]
}

fn scores(raw: &[u8]) -> Vec<f64> {
    raw.iter().map(|&s| f64::from(s)).collect()
}
