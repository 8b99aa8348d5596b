#![allow(dead_code, unused_imports)]

mod mock_mailer;
mod request;

pub use mock_mailer::*;
pub use request::*;

use axum::Router;
use peptidehub_gateway::rate_limit::ResetAttemptLimiter;
use peptidehub_gateway::routes::app_router;
use peptidehub_gateway::state::AppState;
use std::sync::Arc;

pub const TEST_REDIRECT: &str = "http://localhost:5173/auth/reset-password";

/// Fresh limiter, mock mailer and router per test.
pub struct TestContext {
    pub limiter: Arc<ResetAttemptLimiter>,
    pub mailer: Arc<MockMailer>,
    pub app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        let limiter = Arc::new(ResetAttemptLimiter::new());
        let mailer = Arc::new(MockMailer::new());
        let state = AppState::new(limiter.clone(), mailer.clone(), TEST_REDIRECT.to_string());

        Self {
            limiter,
            mailer,
            app: app_router(state),
        }
    }
}
