use crate::calculation::{SavedCalculation, UnlockRecord};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: &str = "1";

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryFile {
    pub schema_version: String,
    pub calculations: Vec<SavedCalculation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PremiumFile {
    pub schema_version: String,
    pub unlock: Option<UnlockRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RequestFile {
    pub schema_version: String,
    pub requests: Vec<crate::inputs::CalculatorInputs>,
}
