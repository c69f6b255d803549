pub mod change;
pub mod measure;
pub mod patient;

pub use change::{Change, ChangeCounts};
pub use measure::{Category, Measure, Polarity, ScoreRange, SummaryStats};
pub use patient::{MeasureOutcome, Patient, SeverityPoint};
