use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{debug, info};

use super::domain::{Household, HouseholdId, Member};
use super::store::{HouseholdStore, StoreError};
use super::validation::ValidationError;
use crate::eligibility::{EligibilityClassifier, EligibilityThresholds};
use crate::fpl::{FplError, GuidelineTables, PercentageCalculator, Region};

/// Facade composing the household store with the FPL and eligibility engines.
pub struct HouseholdService<S> {
    store: Arc<S>,
    calculator: PercentageCalculator,
    classifier: EligibilityClassifier,
}

impl<S> HouseholdService<S>
where
    S: HouseholdStore + 'static,
{
    pub fn new(
        store: Arc<S>,
        tables: Arc<GuidelineTables>,
        thresholds: EligibilityThresholds,
    ) -> Self {
        Self {
            store,
            calculator: PercentageCalculator::new(tables),
            classifier: EligibilityClassifier::new(thresholds),
        }
    }

    /// Validate and persist a household under a freshly generated identifier.
    pub fn submit(&self, household: Household) -> Result<HouseholdId, HouseholdServiceError> {
        household.validate()?;

        let encoded = serde_json::to_string(&household)
            .map_err(|err| HouseholdServiceError::Internal(format!("encode household: {err}")))?;
        let id = HouseholdId::generate();
        self.store.set(&id, encoded)?;

        info!(household_id = %id, members = household.size(), "stored household");
        Ok(id)
    }

    /// Load a stored household, refusing records that no longer decode or validate.
    pub fn get(&self, id: &HouseholdId) -> Result<Household, HouseholdServiceError> {
        let encoded = self.store.get(id)?.ok_or_else(|| {
            HouseholdServiceError::NotFound(format!("no household stored under {id}"))
        })?;

        let household: Household = serde_json::from_str(&encoded).map_err(|err| {
            HouseholdServiceError::Internal(format!("stored household {id} is malformed: {err}"))
        })?;
        household.validate().map_err(|err| {
            HouseholdServiceError::Internal(format!("stored household {id} is invalid: {err}"))
        })?;

        Ok(household)
    }

    /// Unrounded income-to-guideline ratio for a stored household.
    pub fn percentage(
        &self,
        id: &HouseholdId,
        region: Region,
    ) -> Result<f64, HouseholdServiceError> {
        let household = self.get(id)?;
        let ratio = self
            .calculator
            .percentage(household.income_amount(), household.size(), region)?;
        debug!(household_id = %id, %region, ratio, "computed FPL ratio");
        Ok(ratio)
    }

    /// Members eligible for benefits, always measured against the standard region table.
    pub fn eligibility(&self, id: &HouseholdId) -> Result<Vec<Member>, HouseholdServiceError> {
        let household = self.get(id)?;
        let ratio = self
            .calculator
            .percentage(household.income_amount(), household.size(), Region::Standard)?;
        let eligible = self.classifier.classify(&household.members, ratio);
        debug!(
            household_id = %id,
            ratio,
            eligible = eligible.len(),
            members = household.size(),
            "classified household eligibility"
        );
        Ok(eligible)
    }
}

/// Error raised by the household service.
#[derive(Debug, thiserror::Error)]
pub enum HouseholdServiceError {
    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error(transparent)]
    StorageUnavailable(#[from] StoreError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl HouseholdServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HouseholdServiceError::ValidationFailed(_)
            | HouseholdServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            HouseholdServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            HouseholdServiceError::StorageUnavailable(_) | HouseholdServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<FplError> for HouseholdServiceError {
    fn from(value: FplError) -> Self {
        match value {
            FplError::InvalidSize { .. } | FplError::InvalidIncome { .. } => {
                Self::InvalidArgument(value.to_string())
            }
            FplError::NotFound { .. } => Self::NotFound(value.to_string()),
            FplError::DivisionUndefined { .. } => Self::Internal(value.to_string()),
        }
    }
}
