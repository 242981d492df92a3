use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// Opaque key a household is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseholdId(pub String);

impl HouseholdId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HouseholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// A single person in a household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Member {
    pub age: u8,
    pub sex: Sex,
    /// Omitted pregnancy status is kept omitted and counts as not pregnant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pregnancy: Option<bool>,
}

impl Member {
    pub fn is_pregnant(&self) -> bool {
        self.pregnancy == Some(true)
    }
}

/// Annual household income plus members, as submitted and stored.
///
/// Income keeps its JSON number form so an integer amount is stored and returned as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Household {
    pub income: Number,
    pub members: Vec<Member>,
}

impl Household {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Income as a float; NaN when the number has no `f64` representation.
    pub fn income_amount(&self) -> f64 {
        self.income.as_f64().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generated_ids_are_unique() {
        let first = HouseholdId::generate();
        let second = HouseholdId::generate();
        assert_ne!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn members_decode_with_and_without_pregnancy() {
        let household: Household = serde_json::from_value(json!({
            "income": 42000.5,
            "members": [
                { "age": 31, "sex": "female", "pregnancy": true },
                { "age": 4, "sex": "male" }
            ]
        }))
        .expect("household decodes");

        assert_eq!(household.size(), 2);
        assert_eq!(household.income_amount(), 42000.5);
        assert!(household.members[0].is_pregnant());
        assert_eq!(household.members[1].pregnancy, None);
        assert!(!household.members[1].is_pregnant());
    }

    #[test]
    fn unknown_fields_and_sexes_are_rejected() {
        let extra_field = serde_json::from_value::<Household>(json!({
            "income": 1000,
            "members": [{ "age": 31, "sex": "female" }],
            "state": "Iowa"
        }));
        assert!(extra_field.is_err());

        let bad_sex = serde_json::from_value::<Member>(json!({ "age": 31, "sex": "other" }));
        assert!(bad_sex.is_err());

        let extra_member_field =
            serde_json::from_value::<Member>(json!({ "age": 31, "sex": "male", "name": "x" }));
        assert!(extra_member_field.is_err());
    }

    #[test]
    fn integer_income_is_encoded_as_an_integer() {
        let raw = r#"{"income":100000,"members":[{"age":35,"sex":"male"}]}"#;
        let household: Household = serde_json::from_str(raw).expect("household decodes");

        assert_eq!(household.income_amount(), 100_000.0);
        assert_eq!(serde_json::to_string(&household).expect("encodes"), raw);
    }

    #[test]
    fn absent_pregnancy_stays_absent_when_encoded() {
        let member = Member {
            age: 40,
            sex: Sex::Male,
            pregnancy: None,
        };
        let encoded = serde_json::to_value(&member).expect("encodes");
        assert_eq!(encoded, json!({ "age": 40, "sex": "male" }));
    }
}
