use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::EvaluationError;
use super::thresholds::{thresholds_for, ThresholdSchedule};

/// Flat visit fee charged to category A households, in dollars.
pub const NOMINAL_FEE_DOLLARS: u32 = 25;

/// Sliding fee tier assigned to a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlidingFeeCategory {
    A,
    B,
    C,
    D,
    E,
    #[serde(rename = "above_200")]
    AboveTwoHundredPercent,
}

/// What a household pays under its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeeTerms {
    NominalFee { dollars: u32 },
    Discount { percent: u8 },
    NoDiscount,
}

impl SlidingFeeCategory {
    /// Categories in ascending income order.
    pub const LADDER: [SlidingFeeCategory; 6] = [
        SlidingFeeCategory::A,
        SlidingFeeCategory::B,
        SlidingFeeCategory::C,
        SlidingFeeCategory::D,
        SlidingFeeCategory::E,
        SlidingFeeCategory::AboveTwoHundredPercent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SlidingFeeCategory::A => "A – 100% FPL → $25 Nominal Fee",
            SlidingFeeCategory::B => "B – 125% FPL → 90% Discount",
            SlidingFeeCategory::C => "C – 150% FPL → 80% Discount",
            SlidingFeeCategory::D => "D – 175% FPL → 70% Discount",
            SlidingFeeCategory::E => "E – 200% FPL → 60% Discount",
            SlidingFeeCategory::AboveTwoHundredPercent => "Above 200% FPL → No sliding discount",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SlidingFeeCategory::A => "a",
            SlidingFeeCategory::B => "b",
            SlidingFeeCategory::C => "c",
            SlidingFeeCategory::D => "d",
            SlidingFeeCategory::E => "e",
            SlidingFeeCategory::AboveTwoHundredPercent => "above_200",
        }
    }

    pub fn fee_terms(self) -> FeeTerms {
        match self {
            SlidingFeeCategory::A => FeeTerms::NominalFee {
                dollars: NOMINAL_FEE_DOLLARS,
            },
            SlidingFeeCategory::B => FeeTerms::Discount { percent: 90 },
            SlidingFeeCategory::C => FeeTerms::Discount { percent: 80 },
            SlidingFeeCategory::D => FeeTerms::Discount { percent: 70 },
            SlidingFeeCategory::E => FeeTerms::Discount { percent: 60 },
            SlidingFeeCategory::AboveTwoHundredPercent => FeeTerms::NoDiscount,
        }
    }

    /// Upper FPL percentage bound of the tier, `None` above 200%.
    pub fn fpl_ceiling_percent(self) -> Option<u16> {
        match self {
            SlidingFeeCategory::A => Some(100),
            SlidingFeeCategory::B => Some(125),
            SlidingFeeCategory::C => Some(150),
            SlidingFeeCategory::D => Some(175),
            SlidingFeeCategory::E => Some(200),
            SlidingFeeCategory::AboveTwoHundredPercent => None,
        }
    }
}

/// Map a household's total annual income to its sliding fee category.
pub fn classify(
    family_size: u32,
    total_annual_income: Decimal,
) -> Result<SlidingFeeCategory, EvaluationError> {
    let schedule = thresholds_for(family_size)?;
    classify_against(&schedule, total_annual_income)
}

/// Classify against an already resolved schedule. Ceilings are inclusive.
pub fn classify_against(
    schedule: &ThresholdSchedule,
    total_annual_income: Decimal,
) -> Result<SlidingFeeCategory, EvaluationError> {
    if total_annual_income < Decimal::ZERO {
        return Err(EvaluationError::InvalidInput {
            field: "total_annual_income",
            value: total_annual_income.to_f64().unwrap_or(f64::NAN),
        });
    }

    let category = schedule
        .limits
        .iter()
        .position(|limit| total_annual_income <= Decimal::from(*limit))
        .map(|index| SlidingFeeCategory::LADDER[index])
        .unwrap_or(SlidingFeeCategory::AboveTwoHundredPercent);

    Ok(category)
}
