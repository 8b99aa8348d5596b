use std::sync::Arc;

use crate::rate_limit::ResetAttemptLimiter;
use crate::recovery::RecoveryMailer;

// app's shared state
#[derive(Clone)]
pub struct AppState {
    pub limiter: Arc<ResetAttemptLimiter>,
    pub mailer: Arc<dyn RecoveryMailer>,
    pub redirect_url: String, // link target inside the reset email
}

impl AppState {
    pub fn new(
        limiter: Arc<ResetAttemptLimiter>,
        mailer: Arc<dyn RecoveryMailer>,
        redirect_url: String,
    ) -> Self {
        Self {
            limiter,
            mailer,
            redirect_url,
        }
    }
}
