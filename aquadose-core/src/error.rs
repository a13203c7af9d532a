use thiserror::Error;

/// A rejected calculator input. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a positive number")]
    NotPositive { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotPositive { field } => field,
            ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

#[derive(Debug, Error)]
pub enum AquadoseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Calculation '{0}' not found in history")]
    CalculationNotFound(String),

    #[error("Premium is not active; watch a rewarded ad to unlock {0}")]
    PremiumRequired(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse JSON from '{0}': {1}")]
    JsonParsing(String, #[source] serde_json::Error),

    #[error("Failed to encode JSON: {0}")]
    JsonEncoding(#[from] serde_json::Error),

    #[error("Inputs are for the {0} calculator but the result came from the {1} calculator")]
    KindMismatch(String, String),

    #[error("Unsupported schema version '{1}' in '{0}'")]
    SchemaVersion(String, String),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
