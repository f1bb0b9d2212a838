use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an income frequency expects its amount to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBasis {
    AmountBased,
    RateHoursBased,
}

/// Reporting frequency for a single income source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    HourlyDaily,
    HourlyWeekly,
    HourlyMonthly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 7] = [
        Frequency::HourlyDaily,
        Frequency::HourlyWeekly,
        Frequency::HourlyMonthly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
    ];

    /// Occurrences per year used to annualize an entry.
    pub fn multiplier(self) -> f64 {
        match self {
            // Hourly (Daily) pairs a weekly hours figure with ~260 working days.
            Frequency::HourlyDaily => 260.0,
            Frequency::HourlyWeekly => 52.0,
            Frequency::HourlyMonthly => 12.0,
            Frequency::Biweekly => 26.0,
            Frequency::Monthly => 12.0,
            Frequency::Quarterly => 4.0,
            Frequency::Yearly => 1.0,
        }
    }

    pub fn basis(self) -> IncomeBasis {
        match self {
            Frequency::HourlyDaily | Frequency::HourlyWeekly | Frequency::HourlyMonthly => {
                IncomeBasis::RateHoursBased
            }
            Frequency::Biweekly | Frequency::Monthly | Frequency::Quarterly | Frequency::Yearly => {
                IncomeBasis::AmountBased
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::HourlyDaily => "Hourly (Daily)",
            Frequency::HourlyWeekly => "Hourly (Weekly)",
            Frequency::HourlyMonthly => "Hourly (Monthly)",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Frequency::HourlyDaily => "hourly_daily",
            Frequency::HourlyWeekly => "hourly_weekly",
            Frequency::HourlyMonthly => "hourly_monthly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }
}

/// Reported figure for an income source, shaped by the frequency basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IncomeAmount {
    Flat { amount: f64 },
    Hourly { rate: f64, hours_per_week: f64 },
}

/// One reported income source for a household member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub member: String,
    pub source: String,
    pub frequency: Frequency,
    pub amount: IncomeAmount,
}

/// Income entry enriched with its annualized, cent-rounded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIncome {
    pub member: String,
    pub source: String,
    pub frequency: Frequency,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_equivalent: Decimal,
}

/// Validation failures raised by normalization and classification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("unrecognized income frequency '{0}'")]
    InvalidFrequency(String),
    #[error("family size must be at least 1 (found {0})")]
    InvalidFamilySize(i64),
    #[error("{field} must be a non-negative number (found {value})")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("{} income requires {}", .frequency.label(), expected_shape(.frequency))]
    IncompatibleAmount { frequency: Frequency },
    #[error("income entry #{position}: {source}")]
    Entry {
        position: usize,
        #[source]
        source: Box<EvaluationError>,
    },
}

fn expected_shape(frequency: &Frequency) -> &'static str {
    match frequency.basis() {
        IncomeBasis::AmountBased => "a flat amount",
        IncomeBasis::RateHoursBased => "an hourly rate and hours per week",
    }
}
