use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) use roster::workflows::intake::dates::parse_date;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Explicit CLI date first, then the configured pin, then the local calendar.
pub(crate) fn evaluation_date(explicit: Option<NaiveDate>, pinned: Option<NaiveDate>) -> NaiveDate {
    explicit
        .or(pinned)
        .unwrap_or_else(|| Local::now().date_naive())
}
