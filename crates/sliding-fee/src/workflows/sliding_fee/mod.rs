//! Income normalization and FPL threshold classification for the sliding fee schedule.

mod classifier;
mod domain;
mod evaluation;
pub mod export;
pub(crate) mod normalizer;
pub mod router;
pub mod service;
mod thresholds;
pub mod views;

#[cfg(test)]
mod tests;

pub use classifier::{
    classify, classify_against, FeeTerms, SlidingFeeCategory, NOMINAL_FEE_DOLLARS,
};
pub use domain::{
    EvaluationError, Frequency, IncomeAmount, IncomeBasis, IncomeEntry, NormalizedIncome,
};
pub use evaluation::{evaluate_household, HouseholdEvaluation};
pub use export::{income_summary_csv, write_income_summary, DEFAULT_EXPORT_FILE_NAME};
pub use normalizer::{normalize, round_to_cents};
pub use router::sliding_fee_router;
pub use service::{EvaluationRequest, ExportArtifact, SlidingFeeService, SlidingFeeServiceError};
pub use thresholds::{
    thresholds_for, ThresholdSchedule, EXTRA_MEMBER_INCREMENT, FPL_PERCENTAGES,
    TABULATED_FAMILY_SIZES,
};
pub use views::{EvaluationView, IncomeRecordView, ThresholdScheduleView, ThresholdTierView};
