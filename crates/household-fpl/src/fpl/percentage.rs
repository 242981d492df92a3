use std::sync::Arc;

use serde::Serialize;

use super::guidelines::GuidelineTables;
use super::region::Region;
use super::FplError;

/// Household income measured against the applicable poverty guideline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FplAssessment {
    pub region: Region,
    pub household_size: usize,
    pub income: f64,
    pub guideline: u64,
    /// `income / guideline` as a bare ratio (1.0 means exactly at the guideline).
    pub ratio: f64,
}

/// Computes income-to-guideline ratios over a shared, read-only set of tables.
#[derive(Debug, Clone)]
pub struct PercentageCalculator {
    tables: Arc<GuidelineTables>,
}

impl PercentageCalculator {
    pub fn new(tables: Arc<GuidelineTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &GuidelineTables {
        &self.tables
    }

    pub fn assess(
        &self,
        income: f64,
        household_size: usize,
        region: Region,
    ) -> Result<FplAssessment, FplError> {
        if !income.is_finite() || income < 0.0 {
            return Err(FplError::InvalidIncome { income });
        }

        let guideline = self.tables.lookup(region, household_size)?;
        if guideline == 0 {
            return Err(FplError::DivisionUndefined {
                region,
                size: household_size,
            });
        }

        Ok(FplAssessment {
            region,
            household_size,
            income,
            guideline,
            ratio: income / guideline as f64,
        })
    }

    /// Unrounded `income / guideline` ratio.
    pub fn percentage(
        &self,
        income: f64,
        household_size: usize,
        region: Region,
    ) -> Result<f64, FplError> {
        self.assess(income, household_size, region)
            .map(|assessment| assessment.ratio)
    }
}

/// Round a ratio to four decimal places for presentation.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 10_000.0
}
