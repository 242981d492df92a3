use super::domain::HouseholdId;

/// Key-value storage for encoded household records. Last write wins.
pub trait HouseholdStore: Send + Sync {
    fn get(&self, id: &HouseholdId) -> Result<Option<String>, StoreError>;
    fn set(&self, id: &HouseholdId, encoded: String) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("household store unavailable: {0}")]
    Unavailable(String),
}
