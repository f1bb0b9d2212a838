//! Intake of raw household income rows from spreadsheets and API payloads.

mod mapping;
mod normalizer;
mod parser;

pub use parser::RawIncomeEntry;

use crate::workflows::sliding_fee::{EvaluationError, IncomeEntry};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum IncomeImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { row: usize, source: EvaluationError },
}

impl std::fmt::Display for IncomeImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeImportError::Io(err) => write!(f, "failed to read income spreadsheet: {}", err),
            IncomeImportError::Csv(err) => write!(f, "invalid income CSV data: {}", err),
            IncomeImportError::Row { row, source } => {
                write!(f, "income row {} rejected: {}", row, source)
            }
        }
    }
}

impl std::error::Error for IncomeImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IncomeImportError::Io(err) => Some(err),
            IncomeImportError::Csv(err) => Some(err),
            IncomeImportError::Row { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for IncomeImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IncomeImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Converts raw rows into validated income entries.
pub fn entries_from_raw(
    rows: Vec<RawIncomeEntry>,
) -> Result<Vec<IncomeEntry>, (usize, EvaluationError)> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.into_entry().map_err(|err| (index + 1, err)))
        .collect()
}

pub struct IncomeCsvImporter;

impl IncomeCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<IncomeEntry>, IncomeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse every row, rejecting the upload at the first invalid one.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<IncomeEntry>, IncomeImportError> {
        let rows = parser::parse_rows(reader)?;
        entries_from_raw(rows).map_err(|(row, source)| IncomeImportError::Row { row, source })
    }
}
