//! CSV export of saved calculations.

use crate::error::AquadoseError;
use aquadose_schemas::calculation::SavedCalculation;
use csv::Writer;
use serde::Serialize;
use std::{fs, path::Path};

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    calculator: &'a str,
    label: &'a str,
    timestamp_ms: i64,
    inputs_json: String,
    result: &'a str,
    notes: &'a str,
}

pub struct HistoryExporter {
    writer: Writer<fs::File>,
    path: String,
}

impl HistoryExporter {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AquadoseError> {
        let path = path.as_ref().display().to_string();
        let writer = Writer::from_path(&path).map_err(|e| AquadoseError::CsvError(path.clone(), e))?;
        Ok(Self { writer, path })
    }

    pub fn write_calculation(&mut self, calculation: &SavedCalculation) -> Result<(), AquadoseError> {
        let row = ExportRow {
            id: &calculation.id,
            calculator: calculation.kind.as_str(),
            label: calculation.kind.label(),
            timestamp_ms: calculation.timestamp,
            inputs_json: serde_json::to_string(&calculation.inputs)?,
            result: &calculation.result,
            notes: calculation.notes.as_deref().unwrap_or(""),
        };

        self.writer
            .serialize(row)
            .map_err(|e| AquadoseError::CsvError(self.path.clone(), e))
    }

    pub fn finish(mut self) -> Result<(), AquadoseError> {
        self.writer
            .flush()
            .map_err(|e| AquadoseError::FileIO(self.path.clone(), e))
    }
}

/// Writes every calculation to `path` and returns how many rows were written.
pub fn export_history(calculations: &[SavedCalculation], path: impl AsRef<Path>) -> Result<usize, AquadoseError> {
    let mut exporter = HistoryExporter::new(path)?;
    for calculation in calculations {
        exporter.write_calculation(calculation)?;
    }
    exporter.finish()?;
    Ok(calculations.len())
}
