use axum::{Json, extract::State};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::identifier::{fingerprint, normalize, validate_email};
use crate::metrics::{LIMITER_TRACKED, RESET_REQUESTS_TOTAL, RESET_THROTTLED_TOTAL};
use crate::models::{ForgotPasswordRequest, MessageResponse};
use crate::state::AppState;

pub const RESET_SENT_MESSAGE: &str = "Password reset instructions sent";

// attempt stays counted even if the upstream email fails
pub async fn forgot_password_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    RESET_REQUESTS_TOTAL.inc();

    let email = normalize(&payload.email);
    validate_email(&email)?;
    let account = fingerprint(&email);

    let allowed = state.limiter.check_and_record(&email);
    LIMITER_TRACKED.set(state.limiter.len() as f64);

    if !allowed {
        RESET_THROTTLED_TOTAL.inc();
        warn!(%account, "Password reset throttled");
        return Err(AppError::TooManyAttempts);
    }

    info!(
        %account,
        attempt = state.limiter.attempts(&email).unwrap_or(1),
        "Password reset allowed"
    );

    state.mailer.send_recovery(&email, &state.redirect_url).await?;

    Ok(Json(MessageResponse {
        message: RESET_SENT_MESSAGE.to_string(),
    }))
}
