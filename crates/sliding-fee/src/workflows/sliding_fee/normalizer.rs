use rust_decimal::{Decimal, RoundingStrategy};

use super::domain::{EvaluationError, IncomeAmount, IncomeBasis, IncomeEntry};

/// Annualize a single income entry, rounded to the cent.
pub fn normalize(entry: &IncomeEntry) -> Result<Decimal, EvaluationError> {
    let multiplier = entry.frequency.multiplier();

    let total = match (entry.frequency.basis(), entry.amount) {
        (IncomeBasis::RateHoursBased, IncomeAmount::Hourly { rate, hours_per_week }) => {
            let rate = non_negative("rate", rate)?;
            let hours_per_week = non_negative("hours_per_week", hours_per_week)?;
            rate * hours_per_week * multiplier
        }
        (IncomeBasis::AmountBased, IncomeAmount::Flat { amount }) => {
            non_negative("amount", amount)? * multiplier
        }
        _ => {
            return Err(EvaluationError::IncompatibleAmount {
                frequency: entry.frequency,
            })
        }
    };

    round_to_cents(total).ok_or(EvaluationError::InvalidInput {
        field: "annual_equivalent",
        value: total,
    })
}

/// Round the stored binary value to two decimal places, exact ties to even.
///
/// Returns `None` when the value is not finite or does not fit a `Decimal`.
pub fn round_to_cents(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, EvaluationError> {
    if value.is_finite() && value >= 0.0 {
        // -0.0 passes the comparison; collapse it so it never prints as "-0.00".
        Ok(if value == 0.0 { 0.0 } else { value })
    } else {
        Err(EvaluationError::InvalidInput { field, value })
    }
}
