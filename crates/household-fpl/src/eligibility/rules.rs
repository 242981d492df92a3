use serde::Serialize;

use super::EligibilityThresholds;
use crate::household::Member;

/// Which threshold admitted a member. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityRule {
    Child,
    Infant,
    Pregnancy,
    General,
}

impl EligibilityRule {
    pub fn label(self) -> &'static str {
        match self {
            EligibilityRule::Child => "child (ages 2-18)",
            EligibilityRule::Infant => "infant (under 2)",
            EligibilityRule::Pregnancy => "pregnancy",
            EligibilityRule::General => "general",
        }
    }
}

pub(crate) fn matching_rule(
    member: &Member,
    percent_of_fpl: f64,
    thresholds: &EligibilityThresholds,
) -> Option<EligibilityRule> {
    let age = member.age;

    if (2..=18).contains(&age) && percent_of_fpl <= thresholds.child_percent {
        return Some(EligibilityRule::Child);
    }

    if age > 0 && age < 2 && percent_of_fpl <= thresholds.infant_percent {
        return Some(EligibilityRule::Infant);
    }

    if member.is_pregnant() && percent_of_fpl <= thresholds.pregnancy_percent {
        return Some(EligibilityRule::Pregnancy);
    }

    if percent_of_fpl <= thresholds.general_percent {
        return Some(EligibilityRule::General);
    }

    None
}
