use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of a patient's pre/post change on one measure, judged against
/// the measure's MCID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Change {
    Worse,
    Stable,
    Improved,
}

impl Change {
    pub const ALL: [Change; 3] = [Change::Worse, Change::Stable, Change::Improved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worse => "worse",
            Self::Stable => "stable",
            Self::Improved => "improved",
        }
    }

    /// The label a classification would carry with pre and post swapped.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Worse => Self::Improved,
            Self::Stable => Self::Stable,
            Self::Improved => Self::Worse,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Change {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worse" => Ok(Self::Worse),
            "stable" => Ok(Self::Stable),
            "improved" => Ok(Self::Improved),
            other => Err(format!("unknown change direction: {other}")),
        }
    }
}

/// Tally of change labels across the cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeCounts {
    pub worse: usize,
    pub stable: usize,
    pub improved: usize,
}

impl ChangeCounts {
    pub fn tally(changes: impl IntoIterator<Item = Change>) -> Self {
        let mut counts = Self::default();
        for change in changes {
            match change {
                Change::Worse => counts.worse += 1,
                Change::Stable => counts.stable += 1,
                Change::Improved => counts.improved += 1,
            }
        }
        counts
    }

    pub fn get(&self, change: Change) -> usize {
        match change {
            Change::Worse => self.worse,
            Change::Stable => self.stable,
            Change::Improved => self.improved,
        }
    }

    pub fn total(&self) -> usize {
        self.worse + self.stable + self.improved
    }
}
