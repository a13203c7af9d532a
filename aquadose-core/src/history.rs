//! Saved calculations, newest first, kept in a JSON file.

use crate::{
    dosing::summary,
    error::AquadoseError,
    json_file::{read_json, write_json},
};
use aquadose_schemas::{
    calculation::SavedCalculation,
    file_formats::{HistoryFile, SCHEMA_VERSION},
    inputs::CalculatorInputs,
    results::DoseResult,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_MAX_ITEMS: usize = 100;

pub struct HistoryStore {
    path: PathBuf,
    max_items: usize,
    calculations: Vec<SavedCalculation>,
}

impl HistoryStore {
    /// Opens the history at `path`. A missing file is an empty history.
    pub fn load(path: impl AsRef<Path>, max_items: usize) -> Result<Self, AquadoseError> {
        let path = path.as_ref().to_path_buf();
        let mut calculations = match read_json::<HistoryFile>(&path)? {
            Some(file) => {
                if file.schema_version != SCHEMA_VERSION {
                    return Err(AquadoseError::SchemaVersion(
                        path.display().to_string(),
                        file.schema_version,
                    ));
                }
                file.calculations
            }
            None => Vec::new(),
        };

        if calculations.len() > max_items {
            warn!(
                stored = calculations.len(),
                max_items, "history holds more entries than allowed, dropping the oldest"
            );
            calculations.truncate(max_items);
        }

        Ok(Self {
            path,
            max_items,
            calculations,
        })
    }

    pub fn list(&self) -> &[SavedCalculation] {
        &self.calculations
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SavedCalculation> {
        self.calculations.iter().find(|c| c.id == id)
    }

    /// Saves a successful result. The id is derived from `now_ms`; when that
    /// id is taken a counter is appended. `notes` defaults to the result's
    /// instructions.
    pub fn add(
        &mut self,
        inputs: CalculatorInputs,
        result: &DoseResult,
        notes: Option<String>,
        now_ms: i64,
    ) -> Result<SavedCalculation, AquadoseError> {
        if inputs.kind() != result.kind() {
            return Err(AquadoseError::KindMismatch(
                inputs.kind().to_string(),
                result.kind().to_string(),
            ));
        }

        let mut id = now_ms.to_string();
        let mut suffix = 1;
        while self.get(&id).is_some() {
            id = format!("{}-{}", now_ms, suffix);
            suffix += 1;
        }

        let calculation = SavedCalculation {
            id,
            kind: inputs.kind(),
            timestamp: now_ms,
            inputs,
            result: summary(result),
            notes: notes.or_else(|| Some(result.instructions().to_string())),
        };
        info!(id = %calculation.id, kind = %calculation.kind, "saving calculation");

        let mut updated = Vec::with_capacity(self.calculations.len() + 1);
        updated.push(calculation.clone());
        updated.extend(self.calculations.iter().cloned());
        updated.truncate(self.max_items);
        self.commit(updated)?;
        Ok(calculation)
    }

    /// Removes one entry. Returns `false` if no entry has that id.
    pub fn delete(&mut self, id: &str) -> Result<bool, AquadoseError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let updated = self.calculations.iter().filter(|c| c.id != id).cloned().collect();
        self.commit(updated)?;
        info!(id, "deleted calculation");
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), AquadoseError> {
        info!(count = self.calculations.len(), "clearing history");
        self.commit(Vec::new())
    }

    /// Writes `calculations` and only then makes them the in-memory list,
    /// so a failed write leaves the store as it was.
    fn commit(&mut self, calculations: Vec<SavedCalculation>) -> Result<(), AquadoseError> {
        let file = HistoryFile {
            schema_version: SCHEMA_VERSION.to_string(),
            calculations,
        };
        write_json(&self.path, &file)?;
        self.calculations = file.calculations;
        Ok(())
    }
}
