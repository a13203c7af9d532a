use crate::inputs::CalculatorInputs;
use crate::units::CalculatorKind;
use serde::{Deserialize, Serialize};

/// A result the user chose to keep, as stored in the history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CalculatorKind,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub inputs: CalculatorInputs,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Window during which premium features are unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    /// Milliseconds since the Unix epoch.
    pub unlocked_at: i64,
    pub expires_at: i64,
}
