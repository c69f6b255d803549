use crate::scoring::{Interpretation, Item, SeverityLevel};
use crate::Instrument;

/// Bazaz Dysphagia Scale. Single clinician-rated grade, 0–3.
pub struct Bazaz;

impl Instrument for Bazaz {
    fn id(&self) -> &str {
        "bazaz"
    }

    fn name(&self) -> &str {
        "Bazaz"
    }

    fn max_score(&self) -> u32 {
        3
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![Item::rated(
                "severity",
                "Dysphagia Severity",
                &[
                    "0 \u{2013} None",
                    "1 \u{2013} Mild (rare)",
                    "2 \u{2013} Moderate (occasional solids)",
                    "3 \u{2013} Severe (frequent / liquids)",
                ],
            )]
        });
        &ITEMS
    }

    fn interpret(&self, score: u32) -> Interpretation {
        match score {
            0 => Interpretation::new(SeverityLevel::Normal, "None"),
            1 => Interpretation::new(SeverityLevel::Mild, "Mild"),
            2 => Interpretation::new(SeverityLevel::Moderate, "Moderate"),
            _ => Interpretation::new(SeverityLevel::Severe, "Severe"),
        }
    }
}
