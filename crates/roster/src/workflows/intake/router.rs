use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::dates::deserialize_optional_date;
use super::domain::UserRecord;
use super::service::RosterIntakeService;
use crate::error::AppError;

/// The intake service as shared by HTTP handlers. The mutex serializes every
/// validate-then-add and remove sequence.
pub type SharedIntakeService = Arc<Mutex<RosterIntakeService>>;

#[derive(Clone)]
pub struct IntakeState {
    service: SharedIntakeService,
    pinned_today: Option<NaiveDate>,
}

impl IntakeState {
    pub fn new(service: SharedIntakeService, pinned_today: Option<NaiveDate>) -> Self {
        Self {
            service,
            pinned_today,
        }
    }

    fn today(&self, requested: Option<NaiveDate>) -> NaiveDate {
        requested
            .or(self.pinned_today)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn lock(&self) -> MutexGuard<'_, RosterIntakeService> {
        // Each service call is a single step, so a poisoned lock still guards a consistent roster.
        self.service.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Form submission body: the record fields plus an optional evaluation date.
#[derive(Debug, Deserialize)]
pub struct IntakeRequest {
    #[serde(flatten)]
    pub record: UserRecord,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
}

/// Router exposing roster validation, admission, listing, and retraction.
///
/// `pinned_today` is used when a request carries no `today`; otherwise the local
/// calendar date is.
pub fn intake_router(service: SharedIntakeService, pinned_today: Option<NaiveDate>) -> Router {
    Router::new()
        .route("/api/v1/roster/validate", post(validate_handler))
        .route("/api/v1/roster/users", post(admit_handler).get(list_handler))
        .route("/api/v1/roster/users/:email", delete(retract_handler))
        .with_state(IntakeState::new(service, pinned_today))
}

pub(crate) async fn validate_handler(
    State(state): State<IntakeState>,
    payload: Result<Json<IntakeRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let today = state.today(request.today);
    let candidate = request.record.normalized();
    let summary = state.lock().review(&candidate, today)?;

    let body = json!({
        "status": "valid",
        "summary": summary,
    });
    Ok((StatusCode::OK, Json(body)).into_response())
}

pub(crate) async fn admit_handler(
    State(state): State<IntakeState>,
    payload: Result<Json<IntakeRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let today = state.today(request.today);
    let candidate = request.record.normalized();

    let mut service = state.lock();
    let entry = service.admit(candidate, today)?.entry_view();

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

pub(crate) async fn list_handler(State(state): State<IntakeState>) -> Response {
    let roster = state.lock().roster();
    (StatusCode::OK, Json(roster)).into_response()
}

pub(crate) async fn retract_handler(
    State(state): State<IntakeState>,
    Path(email): Path<String>,
) -> StatusCode {
    state.lock().retract(&email);
    StatusCode::NO_CONTENT
}
