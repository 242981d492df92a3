//! Benefit eligibility over household members.
//!
//! Thresholds are expressed in percent of the poverty guideline (`275.0` means 275% FPL) and the
//! household's bare income-to-guideline ratio is scaled by 100 before comparison. Comparing the
//! bare ratio directly against these values would admit nearly every household, so the scaling
//! is an intentional, documented deviation from the unscaled comparison; see DESIGN.md.

mod rules;

use serde::{Deserialize, Serialize};

use crate::household::Member;
pub use rules::EligibilityRule;

/// Program income limits, each in percent of FPL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityThresholds {
    /// Members aged 2 through 18.
    pub child_percent: f64,
    /// Members younger than 2.
    pub infant_percent: f64,
    pub pregnancy_percent: f64,
    /// Any member.
    pub general_percent: f64,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            child_percent: 275.0,
            infant_percent: 283.0,
            pregnancy_percent: 278.0,
            general_percent: 200.0,
        }
    }
}

/// Stateless classifier applying the thresholds to each member independently.
#[derive(Debug, Clone, Default)]
pub struct EligibilityClassifier {
    thresholds: EligibilityThresholds,
}

impl EligibilityClassifier {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &EligibilityThresholds {
        &self.thresholds
    }

    /// First rule admitting `member` at the household's FPL `ratio`, if any.
    pub fn evaluate(&self, member: &Member, ratio: f64) -> Option<EligibilityRule> {
        rules::matching_rule(member, ratio * 100.0, &self.thresholds)
    }

    /// Members admitted by at least one rule, in their original order.
    pub fn classify(&self, members: &[Member], ratio: f64) -> Vec<Member> {
        members
            .iter()
            .filter(|member| self.evaluate(member, ratio).is_some())
            .cloned()
            .collect()
    }
}
