//! Poverty guideline tables and the income-to-guideline calculator.

mod guidelines;
mod loader;
mod percentage;
mod region;

pub use guidelines::{GuidelineTable, GuidelineTables, TABULATED_SIZES};
pub use loader::{load_region_csv, GuidelineLoadError};
pub use percentage::{round_ratio, FplAssessment, PercentageCalculator};
pub use region::Region;

/// Failure computing a guideline amount or FPL ratio.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FplError {
    #[error("household size must be at least 1 (found {size})")]
    InvalidSize { size: usize },
    #[error("income must be a finite, non-negative amount (found {income})")]
    InvalidIncome { income: f64 },
    #[error("no {region} guideline for a household of {size}")]
    NotFound { region: Region, size: usize },
    #[error("{region} guideline for a household of {size} is zero")]
    DivisionUndefined { region: Region, size: usize },
}
