use super::classifier::{FeeTerms, SlidingFeeCategory};
use super::domain::{Frequency, NormalizedIncome};
use super::evaluation::HouseholdEvaluation;
use super::thresholds::ThresholdSchedule;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecordView {
    pub member: String,
    pub source: String,
    pub frequency: Frequency,
    pub frequency_label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_equivalent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTierView {
    pub fpl_percent: u16,
    pub annual_income_ceiling: u64,
    pub category: SlidingFeeCategory,
    pub category_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdScheduleView {
    pub family_size: u32,
    pub extrapolated: bool,
    pub tiers: Vec<ThresholdTierView>,
}

/// Evaluation payload returned to form and API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationView {
    pub family_size: u32,
    pub records: Vec<IncomeRecordView>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_annual_income: Decimal,
    pub category: SlidingFeeCategory,
    pub category_label: String,
    pub fee_terms: FeeTerms,
    pub thresholds: ThresholdScheduleView,
}

impl From<&NormalizedIncome> for IncomeRecordView {
    fn from(record: &NormalizedIncome) -> Self {
        Self {
            member: record.member.clone(),
            source: record.source.clone(),
            frequency: record.frequency,
            frequency_label: record.frequency.label().to_string(),
            annual_equivalent: record.annual_equivalent,
        }
    }
}

impl From<&ThresholdSchedule> for ThresholdScheduleView {
    fn from(schedule: &ThresholdSchedule) -> Self {
        let tiers = schedule
            .tiers()
            .zip(SlidingFeeCategory::LADDER)
            .map(|((fpl_percent, ceiling), category)| ThresholdTierView {
                fpl_percent,
                annual_income_ceiling: ceiling,
                category,
                category_label: category.label().to_string(),
            })
            .collect();

        Self {
            family_size: schedule.family_size,
            extrapolated: schedule.extrapolated,
            tiers,
        }
    }
}

impl From<&HouseholdEvaluation> for EvaluationView {
    fn from(evaluation: &HouseholdEvaluation) -> Self {
        Self {
            family_size: evaluation.family_size,
            records: evaluation.records.iter().map(IncomeRecordView::from).collect(),
            total_annual_income: evaluation.total_annual_income,
            category: evaluation.category,
            category_label: evaluation.category.label().to_string(),
            fee_terms: evaluation.fee_terms(),
            thresholds: ThresholdScheduleView::from(&evaluation.schedule),
        }
    }
}
