use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{Number, Value};

use crate::eligibility::EligibilityThresholds;
use crate::fpl::GuidelineTables;
use crate::household::domain::{Household, HouseholdId, Member, Sex};
use crate::household::service::HouseholdService;
use crate::household::store::{HouseholdStore, StoreError};

#[derive(Default)]
pub(super) struct MemoryStore {
    records: Mutex<HashMap<HouseholdId, String>>,
}

impl MemoryStore {
    pub(super) fn put_raw(&self, id: &str, encoded: &str) {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .insert(HouseholdId(id.to_string()), encoded.to_string());
    }

    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }
}

impl HouseholdStore for MemoryStore {
    fn get(&self, id: &HouseholdId) -> Result<Option<String>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn set(&self, id: &HouseholdId, encoded: String) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(id.clone(), encoded);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl HouseholdStore for UnavailableStore {
    fn get(&self, _id: &HouseholdId) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn set(&self, _id: &HouseholdId, _encoded: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<HouseholdService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = HouseholdService::new(
        store.clone(),
        Arc::new(GuidelineTables::builtin()),
        EligibilityThresholds::default(),
    );
    (Arc::new(service), store)
}

pub(super) fn unavailable_service() -> Arc<HouseholdService<UnavailableStore>> {
    Arc::new(HouseholdService::new(
        Arc::new(UnavailableStore),
        Arc::new(GuidelineTables::builtin()),
        EligibilityThresholds::default(),
    ))
}

pub(super) fn member(age: u8, sex: Sex, pregnancy: Option<bool>) -> Member {
    Member {
        age,
        sex,
        pregnancy,
    }
}

pub(super) fn income(amount: f64) -> Number {
    Number::from_f64(amount).expect("finite income")
}

/// Two adults, the shape used in the API's sample payloads.
pub(super) fn two_adults(amount: f64) -> Household {
    Household {
        income: income(amount),
        members: vec![
            member(105, Sex::Male, None),
            member(35, Sex::Male, None),
        ],
    }
}

pub(super) fn family(amount: f64) -> Household {
    Household {
        income: income(amount),
        members: vec![
            member(38, Sex::Female, Some(true)),
            member(41, Sex::Male, Some(false)),
            member(9, Sex::Female, None),
            member(1, Sex::Male, None),
        ],
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
