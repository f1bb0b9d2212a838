use super::mapping::frequency_for_label;
use crate::workflows::sliding_fee::normalizer::non_negative;
use crate::workflows::sliding_fee::{EvaluationError, IncomeAmount, IncomeBasis, IncomeEntry};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Untrusted income row as captured from a CSV upload or JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIncomeEntry {
    #[serde(default, alias = "Household Member")]
    pub member: String,
    #[serde(default, alias = "Income Source")]
    pub source: String,
    #[serde(alias = "Frequency")]
    pub frequency: String,
    #[serde(default, alias = "Amount")]
    pub amount: Option<f64>,
    #[serde(default, alias = "Hourly Rate")]
    pub rate: Option<f64>,
    #[serde(default, alias = "Hours/Week")]
    pub hours_per_week: Option<f64>,
}

impl RawIncomeEntry {
    /// Resolve the frequency label and shape the amount for its basis.
    ///
    /// Numbers the basis needs but the row left blank count as zero. Numbers
    /// the basis ignores are dropped.
    pub fn into_entry(self) -> Result<IncomeEntry, EvaluationError> {
        let frequency = frequency_for_label(&self.frequency)
            .ok_or_else(|| EvaluationError::InvalidFrequency(self.frequency.trim().to_string()))?;

        let amount = match frequency.basis() {
            IncomeBasis::RateHoursBased => IncomeAmount::Hourly {
                rate: non_negative("rate", self.rate.unwrap_or(0.0))?,
                hours_per_week: non_negative(
                    "hours_per_week",
                    self.hours_per_week.unwrap_or(0.0),
                )?,
            },
            IncomeBasis::AmountBased => IncomeAmount::Flat {
                amount: non_negative("amount", self.amount.unwrap_or(0.0))?,
            },
        };

        Ok(IncomeEntry {
            member: self.member,
            source: self.source,
            frequency,
            amount,
        })
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RawIncomeEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<RawIncomeEntry>()
        .collect::<Result<Vec<_>, _>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::sliding_fee::Frequency;
    use std::io::Cursor;

    #[test]
    fn parses_spreadsheet_headers_and_blank_cells() {
        let rows = parse_rows(Cursor::new(
            "Household Member,Income Source,Frequency,Amount,Hourly Rate,Hours/Week\n\
Ana, Clinic ,Hourly (Weekly),,15,40\n\
Luis,Rent,Monthly,650,,\n",
        ))
        .expect("csv parses");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].source, "Clinic");
        assert_eq!(rows[0].amount, None);
        assert_eq!(rows[0].rate, Some(15.0));
        assert_eq!(rows[1].amount, Some(650.0));
        assert_eq!(rows[1].hours_per_week, None);
    }

    #[test]
    fn parses_snake_case_headers_without_optional_columns() {
        let rows = parse_rows(Cursor::new("frequency,amount\nyearly,1200.50\n")).expect("parses");
        assert_eq!(rows[0].member, "");
        assert_eq!(rows[0].amount, Some(1200.5));
    }

    #[test]
    fn into_entry_picks_shape_from_frequency() {
        let raw = RawIncomeEntry {
            member: "Ana".to_string(),
            frequency: "Hourly (Daily)".to_string(),
            amount: Some(999.0),
            rate: Some(12.0),
            ..RawIncomeEntry::default()
        };

        let entry = raw.into_entry().expect("valid row");
        assert_eq!(entry.frequency, Frequency::HourlyDaily);
        assert_eq!(
            entry.amount,
            IncomeAmount::Hourly {
                rate: 12.0,
                hours_per_week: 0.0
            }
        );
    }

    #[test]
    fn into_entry_rejects_unknown_frequency_and_negative_numbers() {
        let raw = RawIncomeEntry {
            frequency: " Weekly ".to_string(),
            amount: Some(100.0),
            ..RawIncomeEntry::default()
        };
        assert_eq!(
            raw.into_entry(),
            Err(EvaluationError::InvalidFrequency("Weekly".to_string()))
        );

        let raw = RawIncomeEntry {
            frequency: "Quarterly".to_string(),
            amount: Some(-100.0),
            ..RawIncomeEntry::default()
        };
        assert_eq!(
            raw.into_entry(),
            Err(EvaluationError::InvalidInput {
                field: "amount",
                value: -100.0
            })
        );
    }
}
