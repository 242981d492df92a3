use serde::{Deserialize, Serialize};
use std::fmt;

/// Region class selecting which poverty guideline table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// The 48 contiguous states and the District of Columbia.
    Standard,
    Alaska,
    Hawaii,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Standard, Region::Alaska, Region::Hawaii];

    /// Resolve a free-text state name. Anything other than Alaska or Hawaii is standard.
    pub fn from_state_name(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "alaska" => Self::Alaska,
            "hawaii" => Self::Hawaii,
            _ => Self::Standard,
        }
    }

    /// Dollar amount added per person beyond the largest tabulated household.
    pub fn additional_person_increment(self) -> u64 {
        match self {
            Region::Standard => 4540,
            Region::Alaska => 5680,
            Region::Hawaii => 5220,
        }
    }

    /// File name the guideline scraper writes this region's table to.
    pub fn table_file_name(self) -> &'static str {
        match self {
            Region::Standard => "Others.csv",
            Region::Alaska => "Alaska.csv",
            Region::Hawaii => "Hawaii.csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Standard => "standard",
            Region::Alaska => "alaska",
            Region::Hawaii => "hawaii",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_names_resolve_case_insensitively() {
        assert_eq!(Region::from_state_name("Alaska"), Region::Alaska);
        assert_eq!(Region::from_state_name("HAWAII"), Region::Hawaii);
        assert_eq!(Region::from_state_name(" hawaii "), Region::Standard);
        assert_eq!(Region::from_state_name("Iowa"), Region::Standard);
        assert_eq!(Region::from_state_name(""), Region::Standard);
    }

    #[test]
    fn increments_match_published_guidelines() {
        assert_eq!(Region::Standard.additional_person_increment(), 4540);
        assert_eq!(Region::Alaska.additional_person_increment(), 5680);
        assert_eq!(Region::Hawaii.additional_person_increment(), 5220);
    }
}
