use std::ops::RangeInclusive;

use serde::Serialize;
use ts_rs::TS;

use crate::error::SimulationError;

pub const AGE: RangeInclusive<u32> = 30..=80;
pub const LEVELS: RangeInclusive<u32> = 1..=4;
pub const PRE_INSTRUMENTAL: RangeInclusive<u32> = 0..=4;
pub const PRE_PRO: RangeInclusive<u32> = 0..=3;

/// Display names for the pre-operative PRO severity bucket.
pub const PRO_SEVERITY_LABELS: [&str; 4] = ["None", "Mild", "Moderate", "Severe"];

/// Patient parameters for one simulation run. Fields are always within their
/// documented bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SimulationInput {
    age: u32,
    levels: u32,
    pre_instrumental: u32,
    pre_pro: u32,
}

impl SimulationInput {
    /// Reject any parameter outside its range.
    pub fn try_new(
        age: i64,
        levels: i64,
        pre_instrumental: i64,
        pre_pro: i64,
    ) -> Result<Self, SimulationError> {
        Ok(Self {
            age: checked("age", age, AGE)?,
            levels: checked("levels", levels, LEVELS)?,
            pre_instrumental: checked("pre_instrumental", pre_instrumental, PRE_INSTRUMENTAL)?,
            pre_pro: checked("pre_pro", pre_pro, PRE_PRO)?,
        })
    }

    /// Pull every parameter to the nearest bound, the way a range slider
    /// would.
    pub fn clamped(age: i64, levels: i64, pre_instrumental: i64, pre_pro: i64) -> Self {
        Self {
            age: clamp(age, AGE),
            levels: clamp(levels, LEVELS),
            pre_instrumental: clamp(pre_instrumental, PRE_INSTRUMENTAL),
            pre_pro: clamp(pre_pro, PRE_PRO),
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn pre_instrumental(&self) -> u32 {
        self.pre_instrumental
    }

    pub fn pre_pro(&self) -> u32 {
        self.pre_pro
    }

    pub fn pro_severity_label(&self) -> &'static str {
        PRO_SEVERITY_LABELS[self.pre_pro as usize]
    }

    /// Generator seed. Part of the reproducibility contract.
    pub fn seed(&self) -> u32 {
        self.age * 1000 + self.levels * 100 + self.pre_instrumental * 10 + self.pre_pro
    }

    pub fn age_bonus(&self) -> u32 {
        if self.age > 60 {
            10
        } else if self.age > 50 {
            5
        } else {
            0
        }
    }

    /// Baseline risk before noise.
    pub fn baseline(&self) -> f64 {
        f64::from(
            30 + self.levels * 8 + self.pre_instrumental * 10 + self.pre_pro * 5 + self.age_bonus(),
        )
    }
}

fn checked(
    field: &'static str,
    value: i64,
    range: RangeInclusive<u32>,
) -> Result<u32, SimulationError> {
    let (min, max) = (i64::from(*range.start()), i64::from(*range.end()));
    if (min..=max).contains(&value) {
        Ok(value as u32)
    } else {
        Err(SimulationError::InputOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn clamp(value: i64, range: RangeInclusive<u32>) -> u32 {
    value.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
}
