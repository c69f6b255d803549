use crate::scoring::{Interpretation, Item, SeverityLevel};
use crate::Instrument;

/// Grade by safety row and efficiency column.
const GRADE: [[u32; 3]; 3] = [[0, 1, 2], [1, 2, 3], [2, 3, 4]];

/// DIGEST: Dynamic Imaging Grade of Swallowing Toxicity.
/// Safety (penetration/aspiration) and efficiency (residue) profiles, each
/// 0–2, combine through a lookup into a 0–4 grade.
pub struct Digest;

impl Instrument for Digest {
    fn id(&self) -> &str {
        "digest"
    }

    fn name(&self) -> &str {
        "DIGEST"
    }

    fn max_score(&self) -> u32 {
        4
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::rated(
                    "safety",
                    "Safety Profile (PAS)",
                    &[
                        "0 \u{2013} No aspiration",
                        "1 \u{2013} Penetration / trace",
                        "2 \u{2013} Aspiration",
                    ],
                ),
                Item::rated(
                    "efficiency",
                    "Efficiency Profile (Residue)",
                    &[
                        "0 \u{2013} No residue",
                        "1 \u{2013} Mild residue",
                        "2 \u{2013} Severe residue",
                    ],
                ),
            ]
        });
        &ITEMS
    }

    /// Missing profiles count as 0 and anything above 2 as 2.
    fn combine(&self, values: &[u32]) -> u32 {
        let profile = |i: usize| values.get(i).map_or(0, |&v| v.min(2) as usize);
        GRADE[profile(0)][profile(1)]
    }

    fn interpret(&self, score: u32) -> Interpretation {
        match score {
            0 => Interpretation::new(SeverityLevel::Normal, "Normal"),
            1 => Interpretation::new(SeverityLevel::Mild, "Mild"),
            2 => Interpretation::new(SeverityLevel::Moderate, "Moderate"),
            _ => Interpretation::new(SeverityLevel::Severe, "Severe"),
        }
    }
}
