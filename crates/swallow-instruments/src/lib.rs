//! swallow-instruments
//!
//! Item-level score calculators for the swallowing instruments a clinician
//! can fill in directly. Pure data: item definitions, scoring rules and
//! severity bands.

pub mod error;
pub mod instruments;
pub mod scoring;

use error::InstrumentError;
use scoring::{Interpretation, Item, ScoreResult};

/// Trait implemented by each scorable instrument.
pub trait Instrument: Send + Sync {
    /// Identifier, shared with the cohort measure key (e.g., "eat10").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "EAT-10").
    fn name(&self) -> &str;

    /// Highest attainable total score.
    fn max_score(&self) -> u32;

    /// Items in the order responses are given.
    fn items(&self) -> &[Item];

    /// Band and wording for a total score.
    fn interpret(&self, score: u32) -> Interpretation;

    /// Combine per-item points into the total. Summed unless the instrument
    /// says otherwise.
    fn combine(&self, values: &[u32]) -> u32 {
        values.iter().sum()
    }

    /// Resolve option indices into item points, one response per item.
    fn resolve(&self, responses: &[usize]) -> Result<Vec<u32>, InstrumentError> {
        let items = self.items();
        if responses.len() != items.len() {
            return Err(InstrumentError::WrongItemCount {
                instrument_id: self.id().to_string(),
                expected: items.len(),
                found: responses.len(),
            });
        }

        items
            .iter()
            .zip(responses)
            .map(|(item, &option)| {
                item.options
                    .get(option)
                    .map(|o| o.value)
                    .ok_or_else(|| InstrumentError::UnknownOption {
                        instrument_id: self.id().to_string(),
                        item_id: item.id.clone(),
                        option,
                    })
            })
            .collect()
    }

    /// Score a complete set of responses (option indices).
    fn score(&self, responses: &[usize]) -> Result<ScoreResult, InstrumentError> {
        let values = self.resolve(responses)?;
        let score = self.combine(&values);
        Ok(ScoreResult {
            instrument_id: self.id().to_string(),
            score,
            max_score: self.max_score(),
            interpretation: self.interpret(score),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::digest::Digest),
        Box::new(instruments::eat10::Eat10),
        Box::new(instruments::bazaz::Bazaz),
        Box::new(instruments::hss_ddi::HssDdi),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
