use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable answer on a calculator item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemOption {
    pub label: String,
    /// Points this answer contributes.
    pub value: u32,
}

/// A single question or rating on an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub options: Vec<ItemOption>,
}

impl Item {
    /// An item whose option at index `i` is worth `i` points.
    pub fn rated(id: &str, label: &str, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            options: options
                .iter()
                .enumerate()
                .map(|(i, label)| ItemOption {
                    label: label.to_string(),
                    value: i as u32,
                })
                .collect(),
        }
    }

    /// An item with explicit point values per option.
    pub fn weighted(id: &str, label: &str, options: &[(&str, u32)]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            options: options
                .iter()
                .map(|(label, value)| ItemOption {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }
}

/// Clinical severity band for a calculated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

/// A score's band plus the wording the instrument uses for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub level: SeverityLevel,
    pub label: String,
}

impl Interpretation {
    pub fn new(level: SeverityLevel, label: &str) -> Self {
        Self {
            level,
            label: label.to_string(),
        }
    }
}

/// Result of scoring a complete set of responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub score: u32,
    pub max_score: u32,
    pub interpretation: Interpretation,
}
