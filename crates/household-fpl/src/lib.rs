//! Household records, federal poverty level percentages, and benefit eligibility.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod fpl;
pub mod household;
pub mod telemetry;
