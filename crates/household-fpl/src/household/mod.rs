//! Household intake, storage, and the HTTP surface over the FPL and eligibility engines.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Household, HouseholdId, Member, Sex};
pub use router::household_router;
pub use service::{HouseholdService, HouseholdServiceError};
pub use store::{HouseholdStore, StoreError};
pub use validation::{ValidationError, MAX_MEMBER_AGE, MIN_MEMBER_AGE};
