//! Dosing engine for aquarium maintenance: fertilizer, medication, water
//! conditioner and salinity calculators, plus the history and premium
//! collaborators that sit downstream of them.

pub mod dosing;
pub mod error;
pub mod export;
pub mod history;
mod json_file;
pub mod premium;
pub mod units;
pub mod validation;

pub use dosing::calculate;
pub use error::{AquadoseError, ValidationError};
