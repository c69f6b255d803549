use crate::scoring::{Interpretation, Item, SeverityLevel};
use crate::Instrument;

/// EAT-10: Eating Assessment Tool.
/// 10 symptom items rated 0–4, summed to 0–40. A total of 3 or more is
/// abnormal.
pub struct Eat10;

impl Instrument for Eat10 {
    fn id(&self) -> &str {
        "eat10"
    }

    fn name(&self) -> &str {
        "EAT-10"
    }

    fn max_score(&self) -> u32 {
        40
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let rating = [
                "0 \u{2013} No problem",
                "1 \u{2013} Minor",
                "2 \u{2013} Moderate",
                "3 \u{2013} Severe",
                "4 \u{2013} Worst",
            ];

            let items = [
                ("weight_loss", "Weight loss"),
                ("meals_out", "Going out for meals"),
                ("liquids", "Swallowing liquids"),
                ("solids", "Swallowing solids"),
                ("pills", "Swallowing pills"),
                ("painful", "Swallowing is painful"),
                ("pleasure", "Pleasure of eating"),
                ("food_sticks", "Food sticks in throat"),
                ("coughing", "Coughing when eating"),
                ("stressful", "Swallowing is stressful"),
            ];

            items
                .iter()
                .map(|(id, label)| Item::rated(id, label, &rating))
                .collect()
        });
        &ITEMS
    }

    fn interpret(&self, score: u32) -> Interpretation {
        if score < 3 {
            Interpretation::new(SeverityLevel::Normal, "Normal")
        } else if score < 15 {
            Interpretation::new(SeverityLevel::Mild, "Abnormal (\u{2265}3)")
        } else if score < 30 {
            Interpretation::new(SeverityLevel::Moderate, "Moderate\u{2013}Severe")
        } else {
            Interpretation::new(SeverityLevel::Severe, "Severe")
        }
    }
}
