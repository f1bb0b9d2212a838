use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::{classify_against, FeeTerms, SlidingFeeCategory};
use super::domain::{EvaluationError, IncomeEntry, NormalizedIncome};
use super::normalizer::normalize;
use super::thresholds::{thresholds_for, ThresholdSchedule};

/// Outcome of evaluating one household's reported income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdEvaluation {
    pub family_size: u32,
    pub records: Vec<NormalizedIncome>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_annual_income: Decimal,
    pub schedule: ThresholdSchedule,
    pub category: SlidingFeeCategory,
}

impl HouseholdEvaluation {
    pub fn fee_terms(&self) -> FeeTerms {
        self.category.fee_terms()
    }

    pub fn summary(&self) -> String {
        format!(
            "household of {} with ${:.2} annual income: {}",
            self.family_size,
            self.total_annual_income,
            self.category.label()
        )
    }
}

/// Normalize every entry, total the rounded values and classify the sum.
pub fn evaluate_household(
    family_size: u32,
    entries: &[IncomeEntry],
) -> Result<HouseholdEvaluation, EvaluationError> {
    let schedule = thresholds_for(family_size)?;

    let mut records = Vec::with_capacity(entries.len());
    let mut total_annual_income = Decimal::ZERO;
    for (index, entry) in entries.iter().enumerate() {
        let at_position = |source: EvaluationError| EvaluationError::Entry {
            position: index + 1,
            source: Box::new(source),
        };

        let annual_equivalent = normalize(entry).map_err(at_position)?;
        total_annual_income = total_annual_income
            .checked_add(annual_equivalent)
            .ok_or_else(|| {
                at_position(EvaluationError::InvalidInput {
                    field: "total_annual_income",
                    value: f64::INFINITY,
                })
            })?;

        records.push(NormalizedIncome {
            member: entry.member.clone(),
            source: entry.source.clone(),
            frequency: entry.frequency,
            annual_equivalent,
        });
    }

    let category = classify_against(&schedule, total_annual_income)?;

    debug!(
        family_size,
        entries = records.len(),
        %total_annual_income,
        category = category.key(),
        "household evaluated"
    );

    Ok(HouseholdEvaluation {
        family_size,
        records,
        total_annual_income,
        schedule,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::sliding_fee::domain::{Frequency, IncomeAmount};
    use rust_decimal_macros::dec;

    fn entry(member: &str, frequency: Frequency, amount: IncomeAmount) -> IncomeEntry {
        IncomeEntry {
            member: member.to_string(),
            source: "Employer".to_string(),
            frequency,
            amount,
        }
    }

    #[test]
    fn totals_rounded_entries_and_classifies() {
        let entries = vec![
            entry(
                "Ana",
                Frequency::HourlyWeekly,
                IncomeAmount::Hourly {
                    rate: 15.0,
                    hours_per_week: 40.0,
                },
            ),
            entry("Luis", Frequency::Monthly, IncomeAmount::Flat { amount: 2000.0 }),
        ];

        let evaluation = evaluate_household(4, &entries).expect("valid household");

        assert_eq!(evaluation.records.len(), 2);
        assert_eq!(evaluation.records[0].annual_equivalent, dec!(31200));
        assert_eq!(evaluation.records[1].annual_equivalent, dec!(24000));
        assert_eq!(evaluation.total_annual_income, dec!(55200));
        assert_eq!(evaluation.category, SlidingFeeCategory::E);
        assert_eq!(evaluation.fee_terms(), FeeTerms::Discount { percent: 60 });
        assert!(evaluation.summary().contains("$55200.00"));
    }

    #[test]
    fn empty_household_income_is_category_a() {
        let evaluation = evaluate_household(1, &[]).expect("no income is valid");
        assert_eq!(evaluation.total_annual_income, Decimal::ZERO);
        assert_eq!(evaluation.category, SlidingFeeCategory::A);
    }

    #[test]
    fn failing_entry_reports_its_position() {
        let entries = vec![
            entry("Ana", Frequency::Yearly, IncomeAmount::Flat { amount: 1000.0 }),
            entry("Luis", Frequency::Monthly, IncomeAmount::Flat { amount: -20.0 }),
        ];

        let err = evaluate_household(2, &entries).expect_err("negative amount");
        match &err {
            EvaluationError::Entry { position, source } => {
                assert_eq!(*position, 2);
                assert!(matches!(
                    **source,
                    EvaluationError::InvalidInput {
                        field: "amount",
                        ..
                    }
                ));
            }
            other => panic!("expected entry error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("income entry #2"));
    }

    #[test]
    fn zero_family_size_fails_before_normalizing() {
        let entries = vec![entry(
            "Ana",
            Frequency::Monthly,
            IncomeAmount::Flat { amount: -1.0 },
        )];
        assert_eq!(
            evaluate_household(0, &entries),
            Err(EvaluationError::InvalidFamilySize(0))
        );
    }

    #[test]
    fn half_cent_below_a_ceiling_rounds_to_the_stored_value() {
        let single = evaluate_household(
            1,
            &[entry("Ana", Frequency::Yearly, IncomeAmount::Flat { amount: 15060.005 })],
        )
        .expect("valid household");
        assert_eq!(single.total_annual_income, dec!(15060.00));
        assert_eq!(single.category, SlidingFeeCategory::A);

        let four = evaluate_household(
            4,
            &[entry("Luis", Frequency::Yearly, IncomeAmount::Flat { amount: 62400.005 })],
        )
        .expect("valid household");
        assert_eq!(four.total_annual_income, dec!(62400.00));
        assert_eq!(four.category, SlidingFeeCategory::E);
    }

    #[test]
    fn rounded_cents_sum_exactly() {
        let entries = vec![
            entry("Ana", Frequency::Yearly, IncomeAmount::Flat { amount: 15059.9 }),
            entry("Luis", Frequency::Yearly, IncomeAmount::Flat { amount: 0.1 }),
        ];

        let evaluation = evaluate_household(1, &entries).expect("valid household");
        assert_eq!(evaluation.total_annual_income, dec!(15060));
        assert_eq!(evaluation.category, SlidingFeeCategory::A);
    }

    #[test]
    fn overflowing_entry_reports_its_position() {
        let entries = vec![
            entry("Ana", Frequency::Yearly, IncomeAmount::Flat { amount: 1000.0 }),
            entry(
                "Luis",
                Frequency::HourlyDaily,
                IncomeAmount::Hourly {
                    rate: 1e200,
                    hours_per_week: 1e200,
                },
            ),
        ];

        match evaluate_household(2, &entries) {
            Err(EvaluationError::Entry { position, source }) => {
                assert_eq!(position, 2);
                assert!(matches!(
                    *source,
                    EvaluationError::InvalidInput {
                        field: "annual_equivalent",
                        ..
                    }
                ));
            }
            other => panic!("expected entry error, got {other:?}"),
        }
    }
}
