use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref RESET_REQUESTS_TOTAL: Counter = register_counter!(
        "peptidehub_reset_requests_total",
        "Total number of password reset requests"
    )
    .unwrap();
    pub static ref RESET_THROTTLED_TOTAL: Counter = register_counter!(
        "peptidehub_reset_throttled_total",
        "Password reset requests rejected by the attempt limiter"
    )
    .unwrap();
    pub static ref UPSTREAM_FAILURES_TOTAL: Counter = register_counter!(
        "peptidehub_reset_upstream_failures_total",
        "Recovery calls the auth backend failed or rejected"
    )
    .unwrap();
    pub static ref LIMITER_TRACKED: Gauge = register_gauge!(
        "peptidehub_limiter_tracked_identifiers",
        "Identifiers currently held by the reset attempt limiter"
    )
    .unwrap();
    pub static ref RECOVERY_LATENCY: Histogram = register_histogram!(
        "peptidehub_recovery_latency_seconds",
        "Latency of recovery calls to the auth backend in seconds"
    )
    .unwrap();
}
