use household_fpl::config::GuidelineConfig;
use household_fpl::fpl::{GuidelineLoadError, GuidelineTables};
use household_fpl::household::{HouseholdId, HouseholdStore, StoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local key-value store for encoded households.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHouseholdStore {
    records: Arc<Mutex<HashMap<HouseholdId, String>>>,
}

impl HouseholdStore for InMemoryHouseholdStore {
    fn get(&self, id: &HouseholdId) -> Result<Option<String>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("household store lock poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn set(&self, id: &HouseholdId, encoded: String) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("household store lock poisoned".to_string()))?;
        guard.insert(id.clone(), encoded);
        Ok(())
    }
}

/// Load guideline tables from `dir`, falling back to the builtin tables when absent.
pub(crate) fn load_tables(dir: Option<PathBuf>) -> Result<GuidelineTables, GuidelineLoadError> {
    let source = dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());
    let tables = GuidelineConfig { dir }.load_tables()?;
    info!(%source, "poverty guideline tables ready");
    Ok(tables)
}
