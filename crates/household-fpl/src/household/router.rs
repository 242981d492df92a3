use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use super::domain::{Household, HouseholdId, Member};
use super::service::{HouseholdService, HouseholdServiceError};
use super::store::HouseholdStore;
use super::validation::ValidationError;
use crate::fpl::{round_ratio, Region};

/// Router builder exposing household intake and the FPL/eligibility computations.
pub fn household_router<S>(service: Arc<HouseholdService<S>>) -> Router
where
    S: HouseholdStore + 'static,
{
    Router::new()
        .route(
            "/sample-household/",
            post(submit_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/sample-household/:id",
            get(household_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/percentage-fpl/:id/:state",
            get(percentage_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/eligibility/:id",
            get(eligibility_handler::<S>).fallback(method_not_allowed),
        )
        .with_state(service)
}

/// Known path, unsupported method.
pub(crate) async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Invalid URL" })),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitResponse {
    #[serde(rename = "Id")]
    pub(crate) id: HouseholdId,
}

#[derive(Debug, Serialize)]
pub(crate) struct PercentageResponse {
    #[serde(rename = "Percentage")]
    pub(crate) percentage: f64,
}

impl IntoResponse for HouseholdServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "household request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "household request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<HouseholdService<S>>>,
    payload: Result<Json<Household>, JsonRejection>,
) -> Result<Json<SubmitResponse>, HouseholdServiceError>
where
    S: HouseholdStore + 'static,
{
    let Json(household) =
        payload.map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;
    let id = service.submit(household)?;
    Ok(Json(SubmitResponse { id }))
}

pub(crate) async fn household_handler<S>(
    State(service): State<Arc<HouseholdService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Household>, HouseholdServiceError>
where
    S: HouseholdStore + 'static,
{
    let household = service.get(&HouseholdId(id))?;
    Ok(Json(household))
}

pub(crate) async fn percentage_handler<S>(
    State(service): State<Arc<HouseholdService<S>>>,
    Path((id, state)): Path<(String, String)>,
) -> Result<Json<PercentageResponse>, HouseholdServiceError>
where
    S: HouseholdStore + 'static,
{
    let region = Region::from_state_name(&state);
    let ratio = service.percentage(&HouseholdId(id), region)?;
    Ok(Json(PercentageResponse {
        percentage: round_ratio(ratio),
    }))
}

pub(crate) async fn eligibility_handler<S>(
    State(service): State<Arc<HouseholdService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Member>>, HouseholdServiceError>
where
    S: HouseholdStore + 'static,
{
    let eligible = service.eligibility(&HouseholdId(id))?;
    Ok(Json(eligible))
}
