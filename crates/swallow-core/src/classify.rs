//! Pre/post change classification against a signed MCID.
//!
//! Every change label in the crate comes from [`classify_change`]; patient
//! records, cohort summaries and derived agreement all call it.

use crate::models::{Change, Polarity};

/// Classify `post - pre` against `mcid`.
///
/// For [`Polarity::HigherIsWorse`] `mcid` is positive and a rise of at least
/// `mcid` is worse. For [`Polarity::LowerIsWorse`] `mcid` is negative and a
/// drop of at least `|mcid|` is worse. A zero difference is always stable.
pub fn classify_change(polarity: Polarity, mcid: f64, pre: f64, post: f64) -> Change {
    let diff = post - pre;
    match polarity {
        Polarity::LowerIsWorse => {
            if diff <= mcid {
                Change::Worse
            } else if diff >= mcid.abs() {
                Change::Improved
            } else {
                Change::Stable
            }
        }
        Polarity::HigherIsWorse => {
            if diff >= mcid {
                Change::Worse
            } else if diff <= -mcid {
                Change::Improved
            } else {
                Change::Stable
            }
        }
    }
}
