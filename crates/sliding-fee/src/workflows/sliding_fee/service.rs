use serde::{Deserialize, Serialize};

use super::domain::EvaluationError;
use super::evaluation::{evaluate_household, HouseholdEvaluation};
use super::export::{income_summary_csv, DEFAULT_EXPORT_FILE_NAME};
use super::thresholds::{thresholds_for, ThresholdSchedule};
use crate::workflows::intake::{entries_from_raw, RawIncomeEntry};

/// Household submission as received from the form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub family_size: i64,
    #[serde(default)]
    pub entries: Vec<RawIncomeEntry>,
}

/// Spreadsheet export along with the evaluation it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content: Vec<u8>,
    pub evaluation: HouseholdEvaluation,
}

/// Entry point shared by the HTTP routes and the CLI.
#[derive(Debug, Clone)]
pub struct SlidingFeeService {
    export_file_name: String,
}

impl Default for SlidingFeeService {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_FILE_NAME)
    }
}

impl SlidingFeeService {
    pub fn new(export_file_name: impl Into<String>) -> Self {
        Self {
            export_file_name: export_file_name.into(),
        }
    }

    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    /// Validate raw rows and evaluate the household.
    pub fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<HouseholdEvaluation, EvaluationError> {
        let family_size = family_size_from(request.family_size)?;
        let entries = entries_from_raw(request.entries).map_err(|(position, source)| {
            EvaluationError::Entry {
                position,
                source: Box::new(source),
            }
        })?;

        evaluate_household(family_size, &entries)
    }

    /// Evaluate the household and render its records as CSV.
    pub fn export(
        &self,
        request: EvaluationRequest,
    ) -> Result<ExportArtifact, SlidingFeeServiceError> {
        let evaluation = self.evaluate(request)?;
        let content = income_summary_csv(&evaluation.records)?;

        Ok(ExportArtifact {
            file_name: self.export_file_name.clone(),
            content,
            evaluation,
        })
    }

    pub fn thresholds(&self, family_size: i64) -> Result<ThresholdSchedule, EvaluationError> {
        thresholds_for(family_size_from(family_size)?)
    }
}

fn family_size_from(value: i64) -> Result<u32, EvaluationError> {
    u32::try_from(value)
        .ok()
        .filter(|size| *size > 0)
        .ok_or(EvaluationError::InvalidFamilySize(value))
}

/// Error raised by the sliding fee service.
#[derive(Debug, thiserror::Error)]
pub enum SlidingFeeServiceError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error("failed to write income summary: {0}")]
    Export(#[from] csv::Error),
}
