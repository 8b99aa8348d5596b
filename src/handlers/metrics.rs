use axum::http::header;
use axum::response::IntoResponse;
use prometheus::{Encoder, TextEncoder};

use crate::errors::AppError;

pub async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| AppError::Internal(format!("Metrics encoding failed: {}", e)))?;

    let body = String::from_utf8(buffer)
        .map_err(|e| AppError::Internal(format!("Metrics are not UTF-8: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, encoder.format_type().to_string())], body))
}
