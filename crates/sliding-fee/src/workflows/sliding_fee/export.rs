use std::io::Write;

use serde::Serialize;

use super::domain::NormalizedIncome;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "income_summary.csv";

#[derive(Debug, Serialize)]
struct IncomeSummaryRow<'a> {
    #[serde(rename = "Household Member")]
    member: &'a str,
    #[serde(rename = "Income Source")]
    source: &'a str,
    #[serde(rename = "Frequency")]
    frequency: &'static str,
    #[serde(rename = "Annual Equivalent")]
    annual_equivalent: String,
}

impl<'a> From<&'a NormalizedIncome> for IncomeSummaryRow<'a> {
    fn from(record: &'a NormalizedIncome) -> Self {
        Self {
            member: &record.member,
            source: &record.source,
            frequency: record.frequency.label(),
            annual_equivalent: format!("{:.2}", record.annual_equivalent),
        }
    }
}

/// Write normalized records as a spreadsheet-ready CSV with a header row.
pub fn write_income_summary<W: Write>(
    writer: W,
    records: &[NormalizedIncome],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record([
        "Household Member",
        "Income Source",
        "Frequency",
        "Annual Equivalent",
    ])?;
    for record in records {
        csv_writer.serialize(IncomeSummaryRow::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the CSV export into memory for HTTP responses.
pub fn income_summary_csv(records: &[NormalizedIncome]) -> Result<Vec<u8>, csv::Error> {
    let mut buffer = Vec::new();
    write_income_summary(&mut buffer, records)?;
    Ok(buffer)
}
