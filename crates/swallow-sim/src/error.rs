use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("{field} {value} is outside [{min}, {max}]")]
    InputOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}
