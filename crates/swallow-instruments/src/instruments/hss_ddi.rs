use crate::scoring::{Interpretation, Item, SeverityLevel};
use crate::Instrument;

/// HSS-DDI: Hospital for Special Surgery Dysphagia & Dysphonia Index.
/// 10 items, each answered not at all / mild / moderate / severe and worth
/// 0, 3, 6 or 10 points. Total 0–100.
pub struct HssDdi;

impl Instrument for HssDdi {
    fn id(&self) -> &str {
        "hssddi"
    }

    fn name(&self) -> &str {
        "HSS-DDI"
    }

    fn max_score(&self) -> u32 {
        100
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let options: [(&str, u32); 4] = [
                ("0 \u{2013} Not at all", 0),
                ("1\u{2013}3 \u{2013} Mild", 3),
                ("4\u{2013}6 \u{2013} Moderate", 6),
                ("7\u{2013}10 \u{2013} Severe", 10),
            ];

            let items = [
                ("solids", "Difficulty swallowing solids"),
                ("liquids", "Difficulty swallowing liquids"),
                ("choking", "Choking episodes"),
                ("voice", "Voice changes"),
                ("pain", "Pain with swallowing"),
                ("diet", "Diet modification"),
                ("eating_slower", "Eating slower"),
                ("throat_clearing", "Throat clearing"),
                ("globus", "Globus sensation"),
                ("aspiration", "Aspiration concern"),
            ];

            items
                .iter()
                .map(|(id, label)| Item::weighted(id, label, &options))
                .collect()
        });
        &ITEMS
    }

    fn interpret(&self, score: u32) -> Interpretation {
        if score < 12 {
            Interpretation::new(SeverityLevel::Normal, "Minimal")
        } else if score < 30 {
            Interpretation::new(SeverityLevel::Mild, "Mild")
        } else if score < 60 {
            Interpretation::new(SeverityLevel::Moderate, "Moderate")
        } else {
            Interpretation::new(SeverityLevel::Severe, "Severe")
        }
    }
}
