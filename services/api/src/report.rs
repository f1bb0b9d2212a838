use crate::infra::format_currency;
use clap::Args;
use rust_decimal::Decimal;
use sliding_fee::config::{AppConfig, ExportConfig};
use sliding_fee::error::AppError;
use sliding_fee::workflows::intake::IncomeCsvImporter;
use sliding_fee::workflows::sliding_fee::{
    evaluate_household, thresholds_for, write_income_summary, HouseholdEvaluation,
    SlidingFeeCategory, ThresholdSchedule, ThresholdScheduleView,
};
use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Number of people in the household
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) family_size: u32,
    /// CSV with Household Member, Income Source, Frequency, Amount, Hourly Rate, Hours/Week columns
    #[arg(long)]
    pub(crate) income_csv: PathBuf,
    /// Write the income summary spreadsheet next to the results
    #[arg(long)]
    pub(crate) export: bool,
    /// Directory for the exported spreadsheet
    #[arg(long, default_value = ".")]
    pub(crate) out_dir: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ThresholdsArgs {
    /// Number of people in the household
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) family_size: u32,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        family_size,
        income_csv,
        export,
        out_dir,
    } = args;

    let entries = IncomeCsvImporter::from_path(&income_csv)?;
    let evaluation = evaluate_household(family_size, &entries)?;
    print!("{}", render_evaluation(&evaluation));

    if export {
        let config = AppConfig::load()?;
        let path = export_income_summary(&evaluation, &config.export, &out_dir)?;
        println!("\nIncome summary written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_thresholds(args: ThresholdsArgs) -> Result<(), AppError> {
    let schedule = thresholds_for(args.family_size)?;
    print!("{}", render_thresholds(&schedule));
    Ok(())
}

fn export_income_summary(
    evaluation: &HouseholdEvaluation,
    export: &ExportConfig,
    out_dir: &Path,
) -> Result<PathBuf, AppError> {
    let path = out_dir.join(&export.file_name);
    let file = File::create(&path)?;
    write_income_summary(file, &evaluation.records)?;
    Ok(path)
}

pub(crate) fn render_evaluation(evaluation: &HouseholdEvaluation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sliding fee results");
    let _ = writeln!(out, "Family size: {}", evaluation.family_size);
    let _ = writeln!(
        out,
        "Total annual income: {}",
        format_currency(evaluation.total_annual_income)
    );
    let _ = writeln!(out, "Sliding fee category: {}", evaluation.category.label());

    if evaluation.records.is_empty() {
        let _ = writeln!(out, "\nIncome sources: none reported");
    } else {
        let _ = writeln!(out, "\nIncome sources");
        for record in &evaluation.records {
            let _ = writeln!(
                out,
                "- {} | {} | {} | {}",
                display_or_dash(&record.member),
                display_or_dash(&record.source),
                record.frequency.label(),
                format_currency(record.annual_equivalent)
            );
        }
    }

    out
}

pub(crate) fn render_thresholds(schedule: &ThresholdSchedule) -> String {
    let view = ThresholdScheduleView::from(schedule);
    let mut out = String::new();

    let note = if view.extrapolated {
        " (extrapolated beyond eight members)"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "Income ceilings for a household of {}{}",
        view.family_size, note
    );
    for tier in &view.tiers {
        let _ = writeln!(
            out,
            "- up to {} ({}% FPL): {}",
            format_currency(Decimal::from(tier.annual_income_ceiling)),
            tier.fpl_percent,
            tier.category_label
        );
    }
    let _ = writeln!(
        out,
        "- above {}: {}",
        format_currency(Decimal::from(schedule.limits[4])),
        SlidingFeeCategory::AboveTwoHundredPercent.label()
    );

    out
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
