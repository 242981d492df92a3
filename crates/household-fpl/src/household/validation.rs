use super::domain::Household;

pub const MIN_MEMBER_AGE: u8 = 1;
pub const MAX_MEMBER_AGE: u8 = 105;

/// Reasons a household payload is refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed household payload: {0}")]
    Malformed(String),
    #[error("household must list at least one member")]
    NoMembers,
    #[error("member {index} has age {age}, expected {} to {}", MIN_MEMBER_AGE, MAX_MEMBER_AGE)]
    AgeOutOfRange { index: usize, age: u8 },
    #[error("household income must be a finite, non-negative amount (found {income})")]
    InvalidIncome { income: f64 },
}

impl Household {
    /// Enforce the household schema rules that the type system does not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.members.is_empty() {
            return Err(ValidationError::NoMembers);
        }

        if let Some((index, member)) = self
            .members
            .iter()
            .enumerate()
            .find(|(_, member)| !(MIN_MEMBER_AGE..=MAX_MEMBER_AGE).contains(&member.age))
        {
            return Err(ValidationError::AgeOutOfRange {
                index,
                age: member.age,
            });
        }

        let income = self.income_amount();
        if !income.is_finite() || income < 0.0 {
            return Err(ValidationError::InvalidIncome { income });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::domain::{Member, Sex};
    use serde_json::Number;

    fn member(age: u8) -> Member {
        Member {
            age,
            sex: Sex::Female,
            pregnancy: None,
        }
    }

    #[test]
    fn accepts_boundary_ages() {
        let household = Household {
            members: vec![member(1), member(105)],
            income: Number::from(0),
        };
        assert_eq!(household.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_households() {
        let household = Household {
            members: Vec::new(),
            income: Number::from(1000),
        };
        assert_eq!(household.validate(), Err(ValidationError::NoMembers));
    }

    #[test]
    fn rejects_ages_outside_range() {
        let household = Household {
            members: vec![member(30), member(0)],
            income: Number::from(1000),
        };
        assert_eq!(
            household.validate(),
            Err(ValidationError::AgeOutOfRange { index: 1, age: 0 })
        );

        let household = Household {
            members: vec![member(106)],
            income: Number::from(1000),
        };
        assert!(matches!(
            household.validate(),
            Err(ValidationError::AgeOutOfRange { index: 0, age: 106 })
        ));
    }

    #[test]
    fn rejects_negative_income() {
        let household = Household {
            members: vec![member(30)],
            income: Number::from(-5),
        };
        assert!(matches!(
            household.validate(),
            Err(ValidationError::InvalidIncome { .. })
        ));
    }
}
