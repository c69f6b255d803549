use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument_id}: expected {expected} responses, got {found}")]
    WrongItemCount {
        instrument_id: String,
        expected: usize,
        found: usize,
    },

    #[error("{instrument_id}: item '{item_id}' has no option {option}")]
    UnknownOption {
        instrument_id: String,
        item_id: String,
        option: usize,
    },
}
