use crate::infra::load_tables;
use clap::Args;
use household_fpl::error::AppError;
use household_fpl::fpl::{round_ratio, FplAssessment, PercentageCalculator, Region};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PercentageArgs {
    /// Annual household income in dollars
    #[arg(long)]
    pub(crate) income: f64,
    /// Number of people in the household
    #[arg(long)]
    pub(crate) size: usize,
    /// State of residence; Alaska and Hawaii use their own tables
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Directory holding Others.csv, Alaska.csv, and Hawaii.csv
    #[arg(long)]
    pub(crate) guideline_dir: Option<PathBuf>,
}

pub(crate) fn run_percentage_report(args: PercentageArgs) -> Result<(), AppError> {
    let PercentageArgs {
        income,
        size,
        state,
        guideline_dir,
    } = args;

    let tables = load_tables(guideline_dir)?;
    let region = state
        .as_deref()
        .map(Region::from_state_name)
        .unwrap_or(Region::Standard);

    let assessment = PercentageCalculator::new(Arc::new(tables)).assess(income, size, region)?;
    print!("{}", render_assessment(&assessment));
    Ok(())
}

fn render_assessment(assessment: &FplAssessment) -> String {
    format!(
        "Region: {}\nHousehold size: {}\nIncome: ${:.2}\nPoverty guideline: ${}\nFPL ratio: {} ({:.2}% of FPL)\n",
        assessment.region,
        assessment.household_size,
        assessment.income,
        assessment.guideline,
        round_ratio(assessment.ratio),
        assessment.ratio * 100.0,
    )
}
