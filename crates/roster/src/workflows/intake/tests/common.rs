use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::intake::domain::UserRecord;
use crate::workflows::intake::{intake_router, RosterIntakeService, SharedIntakeService};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2024, 1, 1)
}

pub(super) fn ana() -> UserRecord {
    UserRecord {
        first_name: "Ana".to_string(),
        last_name: "Diaz".to_string(),
        email: "ana@ex.com".to_string(),
        position: "Engineer".to_string(),
        birth_date: "2000-01-01".to_string(),
        join_date: "2023-01-01".to_string(),
    }
}

pub(super) fn candidate(email: &str, birth_date: &str, join_date: &str) -> UserRecord {
    UserRecord {
        email: email.to_string(),
        birth_date: birth_date.to_string(),
        join_date: join_date.to_string(),
        ..ana()
    }
}

pub(super) fn shared_service() -> SharedIntakeService {
    Arc::new(Mutex::new(RosterIntakeService::new()))
}

pub(super) fn router_with(service: SharedIntakeService) -> axum::Router {
    intake_router(service, Some(today()))
}

pub(super) fn json_request(method: &str, uri: &str, body: Value) -> axum::http::Request<axum::body::Body> {
    raw_json_request(method, uri, serde_json::to_vec(&body).expect("serialize body"))
}

pub(super) fn raw_json_request(
    method: &str,
    uri: &str,
    body: impl Into<axum::body::Body>,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
