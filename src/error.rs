// ⚠️ Error Types
// Everything the calculator can refuse. Out-of-table lookups and empty
// names/identifiers are not errors; they degrade to zero or neutral values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    /// Date of birth is not three `-`-separated numeric parts
    #[error("Malformed date '{input}': {reason}")]
    MalformedDate { input: String, reason: String },

    /// Evaluation date is not a real calendar date
    #[error("Invalid evaluation date '{0}': expected YYYY-MM-DD")]
    InvalidEvaluationDate(String),
}

impl NumerologyError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        NumerologyError::MalformedDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
